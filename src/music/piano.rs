//! Piano.

use serde::Serialize;

use crate::error::DomainError;
use crate::music::instrument::Instrument;
use crate::music::performance::Performance;
use crate::music::playable::Playable;
use crate::schema::{FieldSpec, FieldValue, Schema};

/// A piano: an [`Instrument`] core plus a key count.
///
/// Playing the keys costs [`Piano::KEY_WEAR`] tuning; the sustain pedal
/// is free.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Piano {
    instrument: Instrument,
    keys: i64,
}

impl Piano {
    /// Key count: a non-negative integer.
    pub const KEYS: FieldSpec = FieldSpec::integer("keys").non_negative();

    /// Full field table, core fields included.
    pub const SCHEMA: Schema =
        Schema::new("Piano", &[Instrument::NAME, Instrument::TUNING, Self::KEYS]);

    /// Tuning lost by a keyboard performance.
    pub const KEY_WEAR: f64 = 0.7;

    /// Create a piano.
    ///
    /// # Errors
    ///
    /// Everything [`Instrument::new`] raises, plus a kind mismatch for
    /// non-integer key counts and a rule violation for negative ones.
    pub fn new(
        name: impl Into<FieldValue>,
        tuning: impl Into<FieldValue>,
        keys: impl Into<FieldValue>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            instrument: Instrument::new(name, tuning)?,
            keys: Self::KEYS.accept_int(keys)?,
        })
    }

    /// Key count.
    #[must_use]
    pub const fn keys(&self) -> i64 {
        self.keys
    }

    /// Press the sustain pedal: one line, no wear, no mutation.
    #[must_use]
    pub fn press_pedal(&self) -> Performance {
        Performance::new().with_note(format!(
            "Pressing the sustain pedal of {}",
            self.instrument.name()
        ))
    }
}

impl Playable for Piano {
    fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    fn instrument_mut(&mut self) -> &mut Instrument {
        &mut self.instrument
    }

    /// Run the keyboard: the shared announcement, then the piano's own
    /// sound and wear.
    fn play(&mut self) -> Performance {
        let mut performance = self.instrument.announce();
        performance.push_note(format!("All {} keys in use. Pom-pom-pom", self.keys));
        performance.add_wear(self.instrument.wear_down(Self::KEY_WEAR));
        performance
    }
}

impl std::fmt::Display for Piano {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.instrument, f)
    }
}
