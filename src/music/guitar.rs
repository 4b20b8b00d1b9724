//! Guitar.

use serde::Serialize;

use crate::error::DomainError;
use crate::music::instrument::Instrument;
use crate::music::performance::Performance;
use crate::music::playable::Playable;
use crate::schema::{FieldSpec, FieldValue, Schema};

/// A guitar: an [`Instrument`] core plus a string count.
///
/// Strumming ([`Playable::play`]) costs [`Guitar::STRUM_WEAR`] tuning;
/// fingerstyle costs more. Both are floor-guarded by the core.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Guitar {
    instrument: Instrument,
    strings: i64,
}

impl Guitar {
    /// String count: a non-negative integer. Zero is a guitar waiting for
    /// strings, not an error.
    pub const STRINGS: FieldSpec = FieldSpec::integer("strings").non_negative();

    /// Full field table, core fields included.
    pub const SCHEMA: Schema = Schema::new(
        "Guitar",
        &[Instrument::NAME, Instrument::TUNING, Self::STRINGS],
    );

    /// Tuning lost by a strummed performance.
    pub const STRUM_WEAR: f64 = 0.5;
    /// Tuning lost by a fingerstyle performance.
    pub const FINGERSTYLE_WEAR: f64 = 0.8;

    /// Create a guitar.
    ///
    /// # Errors
    ///
    /// Everything [`Instrument::new`] raises, plus a kind mismatch for
    /// non-integer string counts and a rule violation for negative ones.
    pub fn new(
        name: impl Into<FieldValue>,
        tuning: impl Into<FieldValue>,
        strings: impl Into<FieldValue>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            instrument: Instrument::new(name, tuning)?,
            strings: Self::STRINGS.accept_int(strings)?,
        })
    }

    /// String count.
    #[must_use]
    pub const fn strings(&self) -> i64 {
        self.strings
    }

    /// Play fingerstyle: no announcement, a single plucked line, heavier
    /// wear than strumming.
    pub fn play_fingerstyle(&mut self) -> Performance {
        let mut performance = Performance::new().with_note(format!(
            "Plucking the strings of {} into a layered melody",
            self.instrument.name()
        ));
        performance.add_wear(self.instrument.wear_down(Self::FINGERSTYLE_WEAR));
        performance
    }
}

impl Playable for Guitar {
    fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    fn instrument_mut(&mut self) -> &mut Instrument {
        &mut self.instrument
    }

    /// Strum: the shared announcement, then the guitar's own sound and
    /// wear.
    fn play(&mut self) -> Performance {
        let mut performance = self.instrument.announce();
        performance.push_note(format!(
            "Strumming across {} strings. Twang",
            self.strings
        ));
        performance.add_wear(self.instrument.wear_down(Self::STRUM_WEAR));
        performance
    }
}

impl std::fmt::Display for Guitar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.instrument, f)
    }
}
