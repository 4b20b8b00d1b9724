//! Enchanted mantle.

use serde::Serialize;

use crate::error::DomainError;
use crate::schema::{FieldSpec, FieldValue, Schema};

/// A mantle with a length, an asking price and a fabric.
///
/// A price of zero is acceptable (a mantle may be given away); length and
/// material are validated like any other physical fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Mantle {
    length: f64,
    price: f64,
    material: String,
}

impl Mantle {
    /// Length: any positive number.
    pub const LENGTH: FieldSpec = FieldSpec::number("length");
    /// Asking price: any non-negative number.
    pub const PRICE: FieldSpec = FieldSpec::number("price").non_negative();
    /// Fabric: non-empty text.
    pub const MATERIAL: FieldSpec = FieldSpec::text("material");

    /// Full field table.
    pub const SCHEMA: Schema =
        Schema::new("Mantle", &[Self::LENGTH, Self::PRICE, Self::MATERIAL]);

    const OFFER: FieldSpec = FieldSpec::number("offer").non_negative();

    /// Fraction of the price lost when reselling second-hand: a third.
    pub const RESALE_DIVISOR: f64 = 3.0;

    /// Create a mantle.
    ///
    /// # Errors
    ///
    /// Returns a kind mismatch when any argument has the wrong kind, or a
    /// rule violation when `length` is not positive, `price` is negative,
    /// or `material` is empty.
    pub fn new(
        length: impl Into<FieldValue>,
        price: impl Into<FieldValue>,
        material: impl Into<FieldValue>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            length: Self::LENGTH.accept_number(length)?,
            price: Self::PRICE.accept_number(price)?,
            material: Self::MATERIAL.accept_text(material)?,
        })
    }

    /// Length.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Asking price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Fabric.
    #[must_use]
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Whether `money` is enough to buy the mantle at its asking price.
    ///
    /// # Errors
    ///
    /// Rejects non-numeric and negative offers.
    pub fn accepts_offer(&self, money: impl Into<FieldValue>) -> Result<bool, DomainError> {
        let money = Self::OFFER.accept_number(money)?;
        Ok(money >= self.price)
    }

    /// The price fetched second-hand: the asking price minus a flat third
    /// for wear.
    #[must_use]
    pub fn resale_price(&self) -> f64 {
        self.price - self.price / Self::RESALE_DIVISOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueRule;
    use crate::schema::{TypeSet, ValueKind};

    #[test]
    fn test_new_valid() {
        let mantle = Mantle::new(150, 300, "silk").unwrap();
        assert_eq!(mantle.length(), 150.0);
        assert_eq!(mantle.price(), 300.0);
        assert_eq!(mantle.material(), "silk");
    }

    #[test]
    fn test_free_mantle_is_fine() {
        let mantle = Mantle::new(150, 0, "wool").unwrap();
        assert_eq!(mantle.price(), 0.0);
        assert_eq!(mantle.resale_price(), 0.0);
    }

    #[test]
    fn test_new_rejects_bad_fields() {
        let err = Mantle::new(-150, 300, "silk").unwrap_err();
        assert_eq!(
            err,
            DomainError::value("length", ValueRule::NotPositive { got: -150.0 })
        );

        let err = Mantle::new(150, "300", "silk").unwrap_err();
        assert_eq!(
            err,
            DomainError::type_mismatch("price", TypeSet::Number, ValueKind::Text)
        );

        let err = Mantle::new(150, 300, "").unwrap_err();
        assert_eq!(err, DomainError::value("material", ValueRule::Empty));
    }

    #[test]
    fn test_accepts_offer() {
        let mantle = Mantle::new(150, 300, "silk").unwrap();
        assert!(!mantle.accepts_offer(50).unwrap());
        assert!(mantle.accepts_offer(300).unwrap());
        assert!(mantle.accepts_offer(301.5).unwrap());
    }

    #[test]
    fn test_accepts_offer_rejects_bad_money() {
        let mantle = Mantle::new(150, 300, "silk").unwrap();
        assert!(mantle.accepts_offer("300").is_err());
        assert!(mantle.accepts_offer(-1).is_err());
        assert!(!mantle.accepts_offer(0).unwrap());
    }

    #[test]
    fn test_resale_price_drops_a_third() {
        let mantle = Mantle::new(150, 300, "silk").unwrap();
        assert_eq!(mantle.resale_price(), 200.0);
    }
}
