//! Shared instrument core.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::music::performance::Performance;
use crate::schema::{FieldSpec, FieldValue, Schema};

/// The core every playable instrument embeds: a display name and a tuning
/// level.
///
/// The tuning level only moves two ways. Playing wears it down through
/// [`Instrument::wear_down`], which is floor-guarded, and
/// [`Instrument::tune`] sets it to an exact target, reporting whether
/// anything changed:
///
/// ```
/// use curio::{Instrument, TuneOutcome};
///
/// let mut upright = Instrument::new("Workshop upright", 50).unwrap();
/// assert_eq!(
///     upright.tune(70).unwrap(),
///     TuneOutcome::Retuned { from: 50.0, to: 70.0 }
/// );
/// assert_eq!(
///     upright.tune(70).unwrap(),
///     TuneOutcome::AlreadyTuned { level: 70.0 }
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Instrument {
    name: String,
    tuning: f64,
}

impl Instrument {
    /// Display name: non-empty text.
    pub const NAME: FieldSpec = FieldSpec::text("name");
    /// Tuning level: any non-negative number.
    pub const TUNING: FieldSpec = FieldSpec::number("tuning level").non_negative();

    /// Full field table.
    pub const SCHEMA: Schema = Schema::new("Instrument", &[Self::NAME, Self::TUNING]);

    /// Create an instrument core.
    ///
    /// # Errors
    ///
    /// Returns a kind mismatch when an argument has the wrong kind, or a
    /// rule violation when `name` is empty or `tuning` is negative.
    pub fn new(
        name: impl Into<FieldValue>,
        tuning: impl Into<FieldValue>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: Self::NAME.accept_text(name)?,
            tuning: Self::TUNING.accept_number(tuning)?,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current tuning level.
    #[must_use]
    pub const fn tuning(&self) -> f64 {
        self.tuning
    }

    /// The line every performance opens with.
    #[must_use]
    pub fn announce(&self) -> Performance {
        Performance::new().with_note(format!("{} is playing", self.name))
    }

    /// Wear the tuning down by `amount`, floor-guarded: when the current
    /// level is below `amount` the decay is skipped outright, not clamped.
    /// Returns the wear actually applied.
    pub fn wear_down(&mut self, amount: f64) -> f64 {
        if self.tuning >= amount {
            self.tuning -= amount;
            amount
        } else {
            0.0
        }
    }

    /// Whether the instrument sits at exactly `target`.
    ///
    /// # Errors
    ///
    /// Rejects non-numeric and negative targets.
    pub fn is_tuned_to(&self, target: impl Into<FieldValue>) -> Result<bool, DomainError> {
        let target = Self::TUNING.accept_number(target)?;
        Ok(self.tuning == target)
    }

    /// Bring the tuning to `target`.
    ///
    /// Idempotent: tuning to the current level changes nothing and says
    /// so in the outcome.
    ///
    /// # Errors
    ///
    /// Rejects non-numeric and negative targets; the level is untouched
    /// on error.
    pub fn tune(&mut self, target: impl Into<FieldValue>) -> Result<TuneOutcome, DomainError> {
        let target = Self::TUNING.accept_number(target)?;
        if self.tuning == target {
            return Ok(TuneOutcome::AlreadyTuned { level: target });
        }
        let from = self.tuning;
        self.tuning = target;
        Ok(TuneOutcome::Retuned { from, to: target })
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instrument {}, tuning level {}", self.name, self.tuning)
    }
}

/// What a tune request did.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TuneOutcome {
    /// Already at the requested level; nothing changed.
    AlreadyTuned {
        /// The level both sides agreed on.
        level: f64,
    },
    /// The level moved.
    Retuned {
        /// Level before the request.
        from: f64,
        /// Level after the request.
        to: f64,
    },
}

impl TuneOutcome {
    /// Whether the request moved the level.
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Retuned { .. })
    }
}

impl std::fmt::Display for TuneOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyTuned { level } => write!(f, "already tuned to {}", level),
            Self::Retuned { from, to } => write!(f, "retuned from {} to {}", from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueRule;

    #[test]
    fn test_new_valid() {
        let instrument = Instrument::new("Workshop upright", 50).unwrap();
        assert_eq!(instrument.name(), "Workshop upright");
        assert_eq!(instrument.tuning(), 50.0);
    }

    #[test]
    fn test_new_allows_fully_detuned() {
        let instrument = Instrument::new("Attic find", 0).unwrap();
        assert_eq!(instrument.tuning(), 0.0);
    }

    #[test]
    fn test_new_rejects_bad_fields() {
        let err = Instrument::new("", 50).unwrap_err();
        assert_eq!(err, DomainError::value("name", ValueRule::Empty));

        let err = Instrument::new("Upright", -1).unwrap_err();
        assert_eq!(
            err,
            DomainError::value("tuning level", ValueRule::Negative { got: -1.0 })
        );

        assert!(Instrument::new("Upright", "50").is_err());
    }

    #[test]
    fn test_announce() {
        let instrument = Instrument::new("Upright", 50).unwrap();
        let performance = instrument.announce();
        assert_eq!(performance.notes(), ["Upright is playing"]);
        assert_eq!(performance.wear(), 0.0);
    }

    #[test]
    fn test_wear_down_applies_when_at_or_above_amount() {
        let mut instrument = Instrument::new("Upright", 25).unwrap();
        assert_eq!(instrument.wear_down(0.5), 0.5);
        assert_eq!(instrument.tuning(), 24.5);
    }

    #[test]
    fn test_wear_down_boundary_reaches_zero() {
        let mut instrument = Instrument::new("Upright", 0.5).unwrap();
        assert_eq!(instrument.wear_down(0.5), 0.5);
        assert_eq!(instrument.tuning(), 0.0);
    }

    #[test]
    fn test_wear_down_skips_below_floor() {
        let mut instrument = Instrument::new("Upright", 0.3).unwrap();
        assert_eq!(instrument.wear_down(0.5), 0.0);
        // Skipped outright, not clamped to zero.
        assert_eq!(instrument.tuning(), 0.3);
    }

    #[test]
    fn test_tune_and_is_tuned_to() {
        let mut instrument = Instrument::new("Upright", 50).unwrap();
        assert!(instrument.is_tuned_to(50).unwrap());
        assert!(!instrument.is_tuned_to(70).unwrap());

        let outcome = instrument.tune(70).unwrap();
        assert_eq!(
            outcome,
            TuneOutcome::Retuned {
                from: 50.0,
                to: 70.0,
            }
        );
        assert!(outcome.changed());
        assert!(instrument.is_tuned_to(70).unwrap());
    }

    #[test]
    fn test_tune_is_idempotent() {
        let mut instrument = Instrument::new("Upright", 70).unwrap();
        let outcome = instrument.tune(70).unwrap();
        assert_eq!(outcome, TuneOutcome::AlreadyTuned { level: 70.0 });
        assert!(!outcome.changed());
        assert_eq!(instrument.tuning(), 70.0);
    }

    #[test]
    fn test_tune_rejects_bad_targets() {
        let mut instrument = Instrument::new("Upright", 50).unwrap();
        assert!(instrument.tune(-1).is_err());
        assert!(instrument.tune("70").is_err());
        assert_eq!(instrument.tuning(), 50.0);

        assert!(instrument.is_tuned_to(-1).is_err());
    }

    #[test]
    fn test_tune_to_zero_is_legal() {
        let mut instrument = Instrument::new("Upright", 50).unwrap();
        let outcome = instrument.tune(0).unwrap();
        assert!(outcome.changed());
        assert_eq!(instrument.tuning(), 0.0);
    }

    #[test]
    fn test_display() {
        let instrument = Instrument::new("Upright", 24.5).unwrap();
        assert_eq!(
            instrument.to_string(),
            "Instrument Upright, tuning level 24.5"
        );

        assert_eq!(
            TuneOutcome::AlreadyTuned { level: 70.0 }.to_string(),
            "already tuned to 70"
        );
        assert_eq!(
            TuneOutcome::Retuned {
                from: 50.0,
                to: 70.0,
            }
            .to_string(),
            "retuned from 50 to 70"
        );
    }
}
