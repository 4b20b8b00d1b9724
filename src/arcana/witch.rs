//! Witch and her wand.

use serde::Serialize;

use crate::arcana::wand::Wand;
use crate::error::{DomainError, ValueRule};
use crate::schema::{FieldSpec, FieldValue, Schema};

/// A witch: health, her own magic level, and the wand she carries.
///
/// A witch never accepts a dead wand. The wand must pass
/// [`Wand::can_spell`] both at construction and on every later swap, so a
/// constructed witch always holds a workable one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Witch {
    health: f64,
    magic: f64,
    wand: Wand,
}

impl Witch {
    /// Health: any positive number.
    pub const HEALTH: FieldSpec = FieldSpec::number("health");
    /// Own magic level: any non-negative number.
    pub const MAGIC: FieldSpec = FieldSpec::number("magic").non_negative();

    /// Full field table for the scalar fields.
    pub const SCHEMA: Schema = Schema::new("Witch", &[Self::HEALTH, Self::MAGIC]);

    const HEAL_AMOUNT: FieldSpec = FieldSpec::number("heal amount");

    /// Create a witch carrying `wand`.
    ///
    /// # Errors
    ///
    /// Returns a kind mismatch or rule violation for the scalar fields,
    /// and rejects a wand that cannot cast spells.
    pub fn new(
        health: impl Into<FieldValue>,
        magic: impl Into<FieldValue>,
        wand: Wand,
    ) -> Result<Self, DomainError> {
        let health = Self::HEALTH.accept_number(health)?;
        let magic = Self::MAGIC.accept_number(magic)?;
        Self::check_wand(&wand)?;
        Ok(Self {
            health,
            magic,
            wand,
        })
    }

    fn check_wand(wand: &Wand) -> Result<(), DomainError> {
        if wand.can_spell() {
            Ok(())
        } else {
            Err(DomainError::value(
                "wand",
                ValueRule::Incapable {
                    capability: "cast a spell",
                },
            ))
        }
    }

    /// Current health.
    #[must_use]
    pub const fn health(&self) -> f64 {
        self.health
    }

    /// Current magic level.
    #[must_use]
    pub const fn magic(&self) -> f64 {
        self.magic
    }

    /// The wand currently carried.
    #[must_use]
    pub const fn wand(&self) -> &Wand {
        &self.wand
    }

    /// Swap in a new wand, subject to the same capability check as the
    /// constructor.
    ///
    /// # Errors
    ///
    /// Rejects a wand that cannot cast spells; the current wand is kept.
    pub fn change_wand(&mut self, new_wand: Wand) -> Result<(), DomainError> {
        Self::check_wand(&new_wand)?;
        self.wand = new_wand;
        Ok(())
    }

    /// Restore health by `amount`.
    ///
    /// # Errors
    ///
    /// Rejects non-numeric and non-positive amounts; health is untouched
    /// on error.
    pub fn heal(&mut self, amount: impl Into<FieldValue>) -> Result<(), DomainError> {
        Self::HEAL_AMOUNT.increase(&mut self.health, amount)
    }

    /// A burst of combat magic: the square of the current magic level.
    #[must_use]
    pub fn magic_surge(&self) -> f64 {
        self.magic * self.magic
    }
}
