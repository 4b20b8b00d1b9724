//! Error types.
//!
//! Every fallible operation in the crate returns [`DomainError`], which has
//! exactly two variants mirroring the two ways an input can be bad: the
//! wrong kind of value ([`DomainError::Type`]) or a type-correct value that
//! breaks a rule ([`DomainError::Value`]). Validation always reports the
//! kind mismatch first, so a negative page count passed as a float is a
//! type error, not a range error.

use thiserror::Error;

use crate::schema::{TypeSet, ValueKind};

/// Errors raised by constructors and mutators.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DomainError {
    /// The supplied value's kind is outside the field's accepted set.
    #[error("{field} must be {expected}, got {found}")]
    Type {
        /// Field being assigned.
        field: &'static str,
        /// Kinds the field accepts.
        expected: TypeSet,
        /// Kind actually supplied.
        found: ValueKind,
    },

    /// A type-correct value broke the field's bound or a relational rule.
    #[error("{field} {rule}")]
    Value {
        /// Field being assigned.
        field: &'static str,
        /// Rule the value broke.
        rule: ValueRule,
    },
}

impl DomainError {
    /// A kind-mismatch error for `field`.
    #[must_use]
    pub const fn type_mismatch(field: &'static str, expected: TypeSet, found: ValueKind) -> Self {
        Self::Type {
            field,
            expected,
            found,
        }
    }

    /// A rule-violation error for `field`.
    #[must_use]
    pub const fn value(field: &'static str, rule: ValueRule) -> Self {
        Self::Value { field, rule }
    }

    /// The field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Type { field, .. } | Self::Value { field, .. } => *field,
        }
    }

    /// Whether this is a kind mismatch.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(self, Self::Type { .. })
    }

    /// Whether this is a rule violation.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value { .. })
    }
}

/// The rules a type-correct value can break.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueRule {
    /// Value must be strictly greater than zero.
    NotPositive {
        /// Value actually supplied.
        got: f64,
    },
    /// Value must be zero or greater.
    Negative {
        /// Value actually supplied.
        got: f64,
    },
    /// Text must not be empty.
    Empty,
    /// Delta larger than the value it would be subtracted from.
    ExceedsCurrent {
        /// Current value of the field.
        current: f64,
        /// Delta actually supplied.
        got: f64,
    },
    /// A collaborator failed its capability check.
    Incapable {
        /// What the collaborator must be able to do.
        capability: &'static str,
    },
}

impl std::fmt::Display for ValueRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPositive { got } => {
                write!(f, "must be greater than zero, got {}", got)
            }
            Self::Negative { got } => {
                write!(f, "must not be negative, got {}", got)
            }
            Self::Empty => write!(f, "must not be empty"),
            Self::ExceedsCurrent { current, got } => {
                write!(
                    f,
                    "must not exceed the current value of {}, got {}",
                    current, got
                )
            }
            Self::Incapable { capability } => {
                write!(f, "must be able to {}", capability)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_error_message() {
        let err = DomainError::type_mismatch("strength", TypeSet::Number, ValueKind::Text);
        assert_eq!(
            err.to_string(),
            "strength must be an integer or a float, got text"
        );
        assert!(err.is_type());
        assert!(!err.is_value());
        assert_eq!(err.field(), "strength");
    }

    #[test]
    fn test_value_error_messages() {
        let err = DomainError::value("strength", ValueRule::NotPositive { got: -7.0 });
        assert_eq!(err.to_string(), "strength must be greater than zero, got -7");
        assert!(err.is_value());

        let err = DomainError::value("magic", ValueRule::Negative { got: -0.5 });
        assert_eq!(err.to_string(), "magic must not be negative, got -0.5");

        let err = DomainError::value("material", ValueRule::Empty);
        assert_eq!(err.to_string(), "material must not be empty");

        let err = DomainError::value(
            "crack amount",
            ValueRule::ExceedsCurrent {
                current: 150.0,
                got: 1000.0,
            },
        );
        assert_eq!(
            err.to_string(),
            "crack amount must not exceed the current value of 150, got 1000"
        );

        let err = DomainError::value(
            "wand",
            ValueRule::Incapable {
                capability: "cast a spell",
            },
        );
        assert_eq!(err.to_string(), "wand must be able to cast a spell");
    }

    #[test]
    fn test_implements_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<DomainError>();
    }
}
