//! Field validation core.
//!
//! This module contains the validation machinery every model family is
//! built on:
//!
//! - [`FieldValue`]: loosely-typed input with a runtime [`ValueKind`]
//! - [`TypeSet`]: the kinds a field accepts
//! - [`Bound`]: the range or emptiness rule a type-correct value must meet
//! - [`FieldSpec`]: one field's full rule, declared once as a constant
//! - [`Schema`]: the [`FieldSpec`] table of a whole entity, for introspection
//!
//! Kind mismatches and bound violations are distinct error cases, and the
//! kind is always checked first.

pub mod field;
pub mod value;

pub use field::{Bound, FieldSpec, Schema, TypeSet};
pub use value::{FieldValue, ValueKind};
