//! Units of measure for a purchase.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a unit abbreviation is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown unit '{0}' (expected one of: kg, g, mg, l, ml, piece)")]
pub struct UnitError(pub String);

/// Unit a product is sold in.
///
/// Stored as its lowercase abbreviation. `Piece` is for whole items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    G,
    Mg,
    L,
    Ml,
    Piece,
}

impl Unit {
    /// Every unit, in display order.
    pub const ALL: [Self; 6] = [Self::Kg, Self::G, Self::Mg, Self::L, Self::Ml, Self::Piece];

    /// Lowercase abbreviation as stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::G => "g",
            Self::Mg => "mg",
            Self::L => "l",
            Self::Ml => "ml",
            Self::Piece => "piece",
        }
    }

    /// Parse an abbreviation, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError`] if the input is not one of the known abbreviations.
    pub fn parse(s: &str) -> Result<Self, UnitError> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnitError(s.to_owned()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
