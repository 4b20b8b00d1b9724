//! Loosely-typed field input.
//!
//! Constructors and mutators across the crate take `impl Into<FieldValue>`
//! so callers can pass plain integers, floats and strings. The value's
//! runtime kind is checked against the owning field's accepted set before
//! any bound is looked at.
//!
//! ## FieldValue Kinds
//!
//! - `Int`: whole numbers (strength deltas, page counts, string counts)
//! - `Float`: fractional numbers (durations, tuning levels)
//! - `Text`: strings (materials, titles, names)

use serde::{Deserialize, Serialize};

/// The runtime kind of a [`FieldValue`].
///
/// Kinds are what the type check compares: a field that accepts integers
/// only will reject a `Float` value even when the number itself would
/// satisfy the field's bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// A whole number.
    Int,
    /// A fractional number.
    Float,
    /// A string.
    Text,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "an integer"),
            Self::Float => write!(f, "a float"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// A field input before validation.
///
/// Supports the three kinds the model families need. Conversions exist for
/// the usual Rust primitives, so call sites stay literal-friendly:
///
/// ```
/// use curio::{FieldValue, ValueKind};
///
/// let strength: FieldValue = 100.into();
/// let duration: FieldValue = 306.0.into();
/// let material: FieldValue = "yew".into();
///
/// assert_eq!(strength.kind(), ValueKind::Int);
/// assert_eq!(duration.kind(), ValueKind::Float);
/// assert_eq!(material.kind(), ValueKind::Text);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl FieldValue {
    /// The runtime kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Get as integer if this is an `Int` value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as float if this is a `Float` value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the numeric payload, coercing integers to `f64`.
    ///
    /// Returns `None` for text.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Get as string reference if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

// Convenient From implementations
impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float(v as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}
