//! Musical instruments.
//!
//! The polymorphic family. [`Instrument`] is the embedded core (name plus
//! tuning level); [`Playable`] is the capability over it, with a default
//! [`Playable::play`] that concrete instruments override. Playing returns
//! a [`Performance`] report instead of printing, and tuning decay is
//! floor-guarded: an instrument too detuned to lose a full wear step
//! loses nothing.

pub mod guitar;
pub mod instrument;
pub mod performance;
pub mod piano;
pub mod playable;

pub use guitar::Guitar;
pub use instrument::{Instrument, TuneOutcome};
pub use performance::Performance;
pub use piano::Piano;
pub use playable::Playable;
