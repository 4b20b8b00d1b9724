//! Arcana: wands, witches and mantles.
//!
//! The family demonstrating the composite pattern: a [`Witch`] owns a
//! [`Wand`] and enforces a capability check on it ([`Wand::can_spell`]) at
//! construction and on every swap. [`Mantle`] is the standalone haggling
//! model.

pub mod mantle;
pub mod wand;
pub mod witch;

pub use mantle::Mantle;
pub use wand::Wand;
pub use witch::Witch;
