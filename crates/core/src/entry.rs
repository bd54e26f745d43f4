//! Grocery entry records.
//!
//! A purchase arrives as a [`RawEntry`] (free text, the way a form collects
//! it), is checked once by [`RawEntry::validate`] and becomes a
//! [`NewGroceryEntry`]. The store assigns an [`EntryId`] on insert and reads
//! rows back as [`GroceryEntry`].

use serde::{Deserialize, Serialize};

use crate::types::{
    DateError, EntryDate, EntryId, LabelError, Price, PriceError, ProductName, StoreName, Unit,
    UnitError, UnitVolume, VolumeError,
};

/// Reasons a raw entry can be rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EntryError {
    #[error(transparent)]
    InvalidLabel(#[from] LabelError),
    #[error(transparent)]
    InvalidVolume(#[from] VolumeError),
    #[error(transparent)]
    InvalidUnit(#[from] UnitError),
    #[error(transparent)]
    InvalidPrice(#[from] PriceError),
    #[error(transparent)]
    InvalidDate(#[from] DateError),
}

/// Unvalidated input for one purchase.
///
/// `date_entered` is optional: when absent, validation stamps today's date,
/// matching a form that records the moment of submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub product_name: String,
    pub unit_volume: String,
    pub unit: String,
    pub price: f64,
    pub store_name: String,
    pub date_entered: Option<String>,
}

impl RawEntry {
    /// Validate every field and build a [`NewGroceryEntry`].
    ///
    /// Fields are checked in form order and the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`EntryError`] variant for the first invalid field.
    pub fn validate(&self) -> Result<NewGroceryEntry, EntryError> {
        let product_name = ProductName::parse(&self.product_name)?;
        let unit_volume = UnitVolume::parse(&self.unit_volume)?;
        let unit = Unit::parse(&self.unit)?;
        let price = Price::new(self.price)?;
        let store_name = StoreName::parse(&self.store_name)?;
        let date_entered = match self.date_entered.as_deref() {
            Some(text) => EntryDate::parse(text)?,
            None => EntryDate::today(),
        };

        Ok(NewGroceryEntry {
            product_name,
            unit_volume,
            unit,
            price,
            store_name,
            date_entered,
        })
    }
}

/// A validated purchase that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGroceryEntry {
    /// What was bought.
    pub product_name: ProductName,
    /// How many units, e.g. 2.
    pub unit_volume: UnitVolume,
    /// Unit of measure, e.g. kg.
    pub unit: Unit,
    /// Price paid.
    pub price: Price,
    /// Where it was bought.
    pub store_name: StoreName,
    /// When it was entered.
    pub date_entered: EntryDate,
}

/// A stored purchase (domain type).
///
/// Entries are append-only: once stored they are never updated or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryEntry {
    /// Row ID, increasing in insertion order.
    pub id: EntryId,
    #[serde(flatten)]
    pub entry: NewGroceryEntry,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn apples() -> RawEntry {
        RawEntry {
            product_name: "apples".to_owned(),
            unit_volume: "2".to_owned(),
            unit: "kg".to_owned(),
            price: 1.99,
            store_name: "auchan".to_owned(),
            date_entered: Some("01:01:2024".to_owned()),
        }
    }

    #[test]
    fn test_validate_valid_entry() {
        let entry = apples().validate().unwrap();
        assert_eq!(entry.product_name.as_str(), "apples");
        assert_eq!(entry.unit_volume.get(), 2);
        assert_eq!(entry.unit, Unit::Kg);
        assert_eq!(entry.store_name.as_str(), "auchan");
        assert_eq!(entry.date_entered.to_string(), "01:01:2024");
    }

    #[test]
    fn test_validate_non_numeric_volume() {
        let raw = RawEntry {
            unit_volume: "two".to_owned(),
            ..apples()
        };
        assert!(matches!(
            raw.validate(),
            Err(EntryError::InvalidVolume(VolumeError(ref v))) if v == "two"
        ));
    }

    #[test]
    fn test_validate_unknown_unit() {
        let raw = RawEntry {
            unit: "pounds".to_owned(),
            ..apples()
        };
        assert!(matches!(raw.validate(), Err(EntryError::InvalidUnit(_))));
    }

    #[test]
    fn test_validate_negative_price() {
        let raw = RawEntry {
            price: -1.0,
            ..apples()
        };
        assert!(matches!(raw.validate(), Err(EntryError::InvalidPrice(_))));
    }

    #[test]
    fn test_validate_empty_store() {
        let raw = RawEntry {
            store_name: String::new(),
            ..apples()
        };
        assert!(matches!(
            raw.validate(),
            Err(EntryError::InvalidLabel(LabelError::Empty {
                field: "store name"
            }))
        ));
    }

    #[test]
    fn test_validate_bad_date() {
        let raw = RawEntry {
            date_entered: Some("2024-01-01".to_owned()),
            ..apples()
        };
        assert!(matches!(raw.validate(), Err(EntryError::InvalidDate(_))));
    }

    #[test]
    fn test_validate_defaults_date_to_today() {
        let raw = RawEntry {
            date_entered: None,
            ..apples()
        };
        let before = EntryDate::today();
        let entry = raw.validate().unwrap();
        let after = EntryDate::today();
        assert!(entry.date_entered >= before && entry.date_entered <= after);
    }

    #[test]
    fn test_grocery_entry_serializes_flat() {
        let stored = GroceryEntry {
            id: EntryId::new(1),
            entry: apples().validate().unwrap(),
        };
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["product_name"], "apples");
        assert_eq!(json["unit_volume"], 2);
        assert_eq!(json["unit"], "kg");
        assert_eq!(json["date_entered"], "01:01:2024");
    }
}
