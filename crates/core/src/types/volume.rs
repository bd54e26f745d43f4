//! Whole-number unit volume.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a volume is not a whole number.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unit volume must be a whole number, got '{0}'")]
pub struct VolumeError(pub String);

/// How many units were bought, e.g. the `2` in "2 kg".
///
/// Parsed from free text. Only plain non-negative integers are accepted:
/// "two", "-1" and "1.5" are all rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitVolume(u32);

impl UnitVolume {
    /// Create a volume from a number.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Parse a volume from text, allowing surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError`] if the input is not a non-negative integer
    /// that fits in a `u32`.
    pub fn parse(s: &str) -> Result<Self, VolumeError> {
        let trimmed = s.trim();
        // u32::from_str accepts a leading '+'; a volume is digits only
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VolumeError(s.to_owned()));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| VolumeError(s.to_owned()))
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for UnitVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UnitVolume {
    type Err = VolumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
