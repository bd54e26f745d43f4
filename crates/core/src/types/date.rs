//! Purchase date in `DD:MM:YYYY` form.
//!
//! The ledger's `date_entered` column holds the date as text, colon
//! separated, day first: `01:01:2024`. [`EntryDate`] keeps a real calendar
//! date and only uses that text form at the storage and display edges.

use core::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `chrono` format string for the stored date text.
pub const DATE_FORMAT: &str = "%d:%m:%Y";

/// Error returned when a date string is not a valid `DD:MM:YYYY` date.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("date must be a valid DD:MM:YYYY date, got '{0}'")]
pub struct DateError(pub String);

/// Calendar date a purchase was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryDate(NaiveDate);

impl EntryDate {
    /// Wrap a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse `DD:MM:YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns [`DateError`] if the text does not match the format or names
    /// a day that does not exist (e.g. `31:02:2024`).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DateError(s.to_owned()))
    }

    /// The underlying calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl std::str::FromStr for EntryDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for EntryDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntryDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
