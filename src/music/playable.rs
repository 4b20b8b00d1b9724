//! The playing capability.

use crate::error::DomainError;
use crate::music::instrument::{Instrument, TuneOutcome};
use crate::music::performance::Performance;
use crate::schema::FieldValue;

/// Anything with an embedded [`Instrument`] that can be played.
///
/// Implementors provide access to the embedded core; everything else comes
/// as provided methods. [`Playable::play`] defaults to the bare
/// announcement with no wear. Concrete instruments override it, start from
/// [`Instrument::announce`], then add their own sound and wear:
///
/// ```
/// use curio::{Guitar, Playable};
///
/// let mut guitar = Guitar::new("Acoustic", 25, 6).unwrap();
/// let performance = guitar.play();
/// assert_eq!(performance.notes()[0], "Acoustic is playing");
/// assert_eq!(performance.wear(), 0.5);
///
/// guitar.tune(30).unwrap();
/// assert!(guitar.is_tuned_to(30).unwrap());
/// ```
pub trait Playable {
    /// The embedded instrument core.
    fn instrument(&self) -> &Instrument;

    /// Mutable access to the core, for tuning and wear.
    fn instrument_mut(&mut self) -> &mut Instrument;

    /// Play the instrument, returning what happened.
    ///
    /// The default is the shared announcement with no wear.
    fn play(&mut self) -> Performance {
        self.instrument().announce()
    }

    /// Bring the tuning to `target`; idempotent.
    ///
    /// # Errors
    ///
    /// Everything [`Instrument::tune`] raises.
    fn tune(&mut self, target: impl Into<FieldValue>) -> Result<TuneOutcome, DomainError>
    where
        Self: Sized,
    {
        self.instrument_mut().tune(target)
    }

    /// Whether the tuning sits at exactly `target`.
    ///
    /// # Errors
    ///
    /// Everything [`Instrument::is_tuned_to`] raises.
    fn is_tuned_to(&self, target: impl Into<FieldValue>) -> Result<bool, DomainError>
    where
        Self: Sized,
    {
        self.instrument().is_tuned_to(target)
    }
}

/// The bare core is itself playable; its performance is the announcement
/// alone.
impl Playable for Instrument {
    fn instrument(&self) -> &Instrument {
        self
    }

    fn instrument_mut(&mut self) -> &mut Instrument {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_instrument_plays_the_announcement() {
        let mut instrument = Instrument::new("Triangle", 10).unwrap();
        let performance = instrument.play();
        assert_eq!(performance.notes(), ["Triangle is playing"]);
        assert_eq!(performance.wear(), 0.0);
        // The default play never wears the tuning.
        assert_eq!(instrument.tuning(), 10.0);
    }

    #[test]
    fn test_trait_tune_delegates_to_the_core() {
        let mut instrument = Instrument::new("Triangle", 10).unwrap();
        let outcome = Playable::tune(&mut instrument, 20).unwrap();
        assert!(outcome.changed());
        assert!(Playable::is_tuned_to(&instrument, 20).unwrap());
    }
}
