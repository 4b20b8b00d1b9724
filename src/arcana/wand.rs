//! Magic wand.

use serde::Serialize;

use crate::error::DomainError;
use crate::schema::{FieldSpec, FieldValue, Schema};

/// An enchanted wand with physical strength, a magic reserve and a body
/// material.
///
/// Strength and material must be present in earnest (strictly positive,
/// non-empty); the magic reserve may legitimately run dry, so zero is
/// acceptable there.
///
/// ```
/// use curio::Wand;
///
/// let wand = Wand::new(100, 100, "yew").unwrap();
/// assert!(wand.can_spell());
///
/// let drained = Wand::new(100, 0, "yew").unwrap();
/// assert!(!drained.can_spell());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Wand {
    strength: f64,
    magic: f64,
    material: String,
}

impl Wand {
    /// Physical strength: any positive number.
    pub const STRENGTH: FieldSpec = FieldSpec::number("strength");
    /// Magic reserve: any non-negative number.
    pub const MAGIC: FieldSpec = FieldSpec::number("magic").non_negative();
    /// Body material: non-empty text.
    pub const MATERIAL: FieldSpec = FieldSpec::text("material");

    /// Full field table.
    pub const SCHEMA: Schema =
        Schema::new("Wand", &[Self::STRENGTH, Self::MAGIC, Self::MATERIAL]);

    const MEND_AMOUNT: FieldSpec = FieldSpec::number("mend amount");
    const CRACK_AMOUNT: FieldSpec = FieldSpec::number("crack amount");

    /// Create a wand.
    ///
    /// # Errors
    ///
    /// Returns a kind mismatch when any argument has the wrong kind, or a
    /// rule violation when `strength` is not positive, `magic` is
    /// negative, or `material` is empty.
    pub fn new(
        strength: impl Into<FieldValue>,
        magic: impl Into<FieldValue>,
        material: impl Into<FieldValue>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            strength: Self::STRENGTH.accept_number(strength)?,
            magic: Self::MAGIC.accept_number(magic)?,
            material: Self::MATERIAL.accept_text(material)?,
        })
    }

    /// Current physical strength.
    #[must_use]
    pub const fn strength(&self) -> f64 {
        self.strength
    }

    /// Current magic reserve.
    #[must_use]
    pub const fn magic(&self) -> f64 {
        self.magic
    }

    /// Body material.
    #[must_use]
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Whether the wand can cast spells at all: the reserve is not empty.
    #[must_use]
    pub fn can_spell(&self) -> bool {
        self.magic > 0.0
    }

    /// Repair the wand, raising strength by `amount`.
    ///
    /// # Errors
    ///
    /// Rejects non-numeric and non-positive amounts; strength is untouched
    /// on error.
    pub fn mend(&mut self, amount: impl Into<FieldValue>) -> Result<(), DomainError> {
        Self::MEND_AMOUNT.increase(&mut self.strength, amount)
    }

    /// Damage the wand, lowering strength by `amount`.
    ///
    /// Cracking away exactly the current strength leaves a wand at zero;
    /// anything past that is rejected.
    ///
    /// # Errors
    ///
    /// Rejects non-numeric amounts, non-positive amounts and amounts
    /// larger than the current strength; strength is untouched on error.
    pub fn crack(&mut self, amount: impl Into<FieldValue>) -> Result<(), DomainError> {
        Self::CRACK_AMOUNT.decrease(&mut self.strength, amount)
    }
}
