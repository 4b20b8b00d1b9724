//! # curio
//!
//! Schema-validated domain models: wands and their witches, books and
//! their editions, and a family of playable instruments.
//!
//! ## Design Principles
//!
//! 1. **Declare Rules Once**: Every validated field is described by a
//!    [`FieldSpec`] constant. Constructors and mutators funnel through the
//!    same spec, so a rule cannot drift between the two.
//!
//! 2. **Kind Before Bound**: Bad input fails in a fixed order. A value of
//!    the wrong kind is a [`DomainError::Type`]; a type-correct value that
//!    breaks a rule is a [`DomainError::Value`]. Nothing is mutated on
//!    either.
//!
//! 3. **Composition Over Inheritance**: A [`Witch`] owns a [`Wand`],
//!    editions embed a [`Book`], concrete instruments embed an
//!    [`Instrument`] and pick up tuning behavior through the [`Playable`]
//!    trait.
//!
//! 4. **Reports, Not Side Effects**: Playing returns a [`Performance`]
//!    and tuning returns a [`TuneOutcome`]. Callers decide what to print.
//!
//! ## Modules
//!
//! - `schema`: field values, kinds, bounds, field specs, entity schemas
//! - `error`: the two-variant error type
//! - `arcana`: wand, witch, mantle
//! - `books`: book plus paper and audio editions
//! - `music`: instrument core, playable capability, guitar, piano

pub mod arcana;
pub mod books;
pub mod error;
pub mod music;
pub mod schema;

// Re-export commonly used types
pub use crate::schema::{Bound, FieldSpec, FieldValue, Schema, TypeSet, ValueKind};

pub use crate::error::{DomainError, ValueRule};

pub use crate::arcana::{Mantle, Wand, Witch};

pub use crate::books::{AudioBook, Book, PaperBook};

pub use crate::music::{Guitar, Instrument, Performance, Piano, Playable, TuneOutcome};
