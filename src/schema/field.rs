//! Declarative field schemas.
//!
//! Every validated field in the crate is described once, as a [`FieldSpec`]
//! constant on its owning type: the field's name, the value kinds it
//! accepts, and the bound a type-correct value must satisfy. Constructors
//! and mutators all funnel through the same spec, so a rule holds at
//! construction time and for every later assignment without being restated.
//!
//! ## Validation Order
//!
//! [`FieldSpec::check`] always tests the kind first and the bound second.
//! A value that is both the wrong kind and out of range reports the kind
//! mismatch.
//!
//! ## Mutation Primitives
//!
//! - [`FieldSpec::store_number`] / [`FieldSpec::store_int`]: validated
//!   assignment
//! - [`FieldSpec::increase`]: validated positive delta, added
//! - [`FieldSpec::decrease`]: validated positive delta, subtracted; rejects
//!   deltas larger than the current value before touching it

use serde::Serialize;

use crate::error::{DomainError, ValueRule};
use crate::schema::value::{FieldValue, ValueKind};

/// The set of value kinds a field accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeSet {
    /// Integers and floats.
    Number,
    /// Integers only.
    Integer,
    /// Floats only.
    Float,
    /// Text only.
    Text,
}

impl TypeSet {
    /// Whether a value of `kind` belongs to this set.
    #[must_use]
    pub const fn admits(self, kind: ValueKind) -> bool {
        matches!(
            (self, kind),
            (TypeSet::Number, ValueKind::Int | ValueKind::Float)
                | (TypeSet::Integer, ValueKind::Int)
                | (TypeSet::Float, ValueKind::Float)
                | (TypeSet::Text, ValueKind::Text)
        )
    }
}

impl std::fmt::Display for TypeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "an integer or a float"),
            Self::Integer => write!(f, "an integer"),
            Self::Float => write!(f, "a float"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// The bound a type-correct value must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Bound {
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    NonNegative,
    /// Text must not be empty.
    NonEmpty,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "strictly positive"),
            Self::NonNegative => write!(f, "zero or greater"),
            Self::NonEmpty => write!(f, "non-empty"),
        }
    }
}

/// One field's validation rule: name, accepted kinds, bound.
///
/// Specs are declared as constants on the owning type and shared by its
/// constructor and mutators:
///
/// ```
/// use curio::{Bound, FieldSpec, TypeSet};
///
/// const STRENGTH: FieldSpec = FieldSpec::number("strength");
/// const MAGIC: FieldSpec = FieldSpec::number("magic").non_negative();
///
/// assert_eq!(STRENGTH.bound(), Bound::Positive);
/// assert_eq!(MAGIC.bound(), Bound::NonNegative);
/// assert_eq!(MAGIC.accepts(), TypeSet::Number);
///
/// assert!(STRENGTH.accept_number(100).is_ok());
/// assert!(STRENGTH.accept_number(0).is_err());
/// assert!(MAGIC.accept_number(0).is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FieldSpec {
    name: &'static str,
    accepts: TypeSet,
    bound: Bound,
}

impl FieldSpec {
    /// A strictly positive field accepting integers and floats.
    #[must_use]
    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            accepts: TypeSet::Number,
            bound: Bound::Positive,
        }
    }

    /// A strictly positive field accepting integers only.
    #[must_use]
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            accepts: TypeSet::Integer,
            bound: Bound::Positive,
        }
    }

    /// A strictly positive field accepting floats only.
    #[must_use]
    pub const fn float(name: &'static str) -> Self {
        Self {
            name,
            accepts: TypeSet::Float,
            bound: Bound::Positive,
        }
    }

    /// A non-empty text field.
    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            accepts: TypeSet::Text,
            bound: Bound::NonEmpty,
        }
    }

    /// Relax a numeric spec's bound to allow zero.
    #[must_use]
    pub const fn non_negative(self) -> Self {
        Self {
            name: self.name,
            accepts: self.accepts,
            bound: Bound::NonNegative,
        }
    }

    /// The field's name as it appears in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The value kinds this field accepts.
    #[must_use]
    pub const fn accepts(&self) -> TypeSet {
        self.accepts
    }

    /// The bound a type-correct value must satisfy.
    #[must_use]
    pub const fn bound(&self) -> Bound {
        self.bound
    }

    /// Validate a value against this spec: kind first, bound second.
    ///
    /// # Errors
    ///
    /// [`DomainError::Type`] when the value's kind is outside the accepted
    /// set, [`DomainError::Value`] when a type-correct value breaks the
    /// bound. NaN never satisfies a numeric bound.
    pub fn check(&self, value: &FieldValue) -> Result<(), DomainError> {
        let kind = value.kind();
        if !self.accepts.admits(kind) {
            return Err(DomainError::type_mismatch(self.name, self.accepts, kind));
        }
        match self.bound {
            Bound::Positive => match value.as_number() {
                Some(got) if !(got > 0.0) => {
                    Err(DomainError::value(self.name, ValueRule::NotPositive { got }))
                }
                _ => Ok(()),
            },
            Bound::NonNegative => match value.as_number() {
                Some(got) if !(got >= 0.0) => {
                    Err(DomainError::value(self.name, ValueRule::Negative { got }))
                }
                _ => Ok(()),
            },
            Bound::NonEmpty => match value.as_text() {
                Some(text) if text.is_empty() => {
                    Err(DomainError::value(self.name, ValueRule::Empty))
                }
                _ => Ok(()),
            },
        }
    }

    /// Validate and return the numeric payload, integers coerced to `f64`.
    ///
    /// # Errors
    ///
    /// Everything [`FieldSpec::check`] raises, plus a kind mismatch when
    /// the validated value carries no number.
    pub fn accept_number(&self, value: impl Into<FieldValue>) -> Result<f64, DomainError> {
        let value = value.into();
        self.check(&value)?;
        match value {
            FieldValue::Int(n) => Ok(n as f64),
            FieldValue::Float(n) => Ok(n),
            FieldValue::Text(_) => Err(DomainError::type_mismatch(
                self.name,
                TypeSet::Number,
                ValueKind::Text,
            )),
        }
    }

    /// Validate and return the integer payload.
    ///
    /// # Errors
    ///
    /// Everything [`FieldSpec::check`] raises, plus a kind mismatch when
    /// the validated value is not an integer.
    pub fn accept_int(&self, value: impl Into<FieldValue>) -> Result<i64, DomainError> {
        let value = value.into();
        self.check(&value)?;
        match value {
            FieldValue::Int(n) => Ok(n),
            other => Err(DomainError::type_mismatch(
                self.name,
                TypeSet::Integer,
                other.kind(),
            )),
        }
    }

    /// Validate and return the text payload.
    ///
    /// # Errors
    ///
    /// Everything [`FieldSpec::check`] raises, plus a kind mismatch when
    /// the validated value is not text.
    pub fn accept_text(&self, value: impl Into<FieldValue>) -> Result<String, DomainError> {
        let value = value.into();
        self.check(&value)?;
        match value {
            FieldValue::Text(text) => Ok(text),
            other => Err(DomainError::type_mismatch(
                self.name,
                TypeSet::Text,
                other.kind(),
            )),
        }
    }

    /// Validated assignment into a numeric slot.
    ///
    /// The slot is untouched unless the value passes.
    ///
    /// # Errors
    ///
    /// Everything [`FieldSpec::accept_number`] raises.
    pub fn store_number(
        &self,
        slot: &mut f64,
        value: impl Into<FieldValue>,
    ) -> Result<(), DomainError> {
        *slot = self.accept_number(value)?;
        Ok(())
    }

    /// Validated assignment into an integer slot.
    ///
    /// # Errors
    ///
    /// Everything [`FieldSpec::accept_int`] raises.
    pub fn store_int(
        &self,
        slot: &mut i64,
        value: impl Into<FieldValue>,
    ) -> Result<(), DomainError> {
        *slot = self.accept_int(value)?;
        Ok(())
    }

    /// Validate `amount` against this spec and add it to `slot`.
    ///
    /// # Errors
    ///
    /// Everything [`FieldSpec::accept_number`] raises. The slot is
    /// untouched on error.
    pub fn increase(
        &self,
        slot: &mut f64,
        amount: impl Into<FieldValue>,
    ) -> Result<(), DomainError> {
        let amount = self.accept_number(amount)?;
        *slot += amount;
        Ok(())
    }

    /// Validate `amount` against this spec and subtract it from `slot`.
    ///
    /// An amount equal to the current value legally zeroes the slot; an
    /// amount larger than it is rejected.
    ///
    /// # Errors
    ///
    /// Everything [`FieldSpec::accept_number`] raises, plus
    /// [`ValueRule::ExceedsCurrent`] when `amount` overshoots. The slot is
    /// untouched on error.
    pub fn decrease(
        &self,
        slot: &mut f64,
        amount: impl Into<FieldValue>,
    ) -> Result<(), DomainError> {
        let amount = self.accept_number(amount)?;
        if amount > *slot {
            return Err(DomainError::value(
                self.name,
                ValueRule::ExceedsCurrent {
                    current: *slot,
                    got: amount,
                },
            ));
        }
        *slot -= amount;
        Ok(())
    }
}

impl std::fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.accepts, self.bound)
    }
}

/// Named group of field specs for one entity type.
///
/// Backed by a static slice, looked up linearly: the families here have a
/// handful of fields each.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Schema {
    entity: &'static str,
    fields: &'static [FieldSpec],
}

impl Schema {
    /// Create a schema for `entity` over a static spec table.
    #[must_use]
    pub const fn new(entity: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { entity, fields }
    }

    /// The entity name this schema describes.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    /// All field specs, in declaration order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Look up a spec by field name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.entity)?;
        for (i, spec) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, " {}", spec)?;
        }
        Ok(())
    }
}
