//! Free-text labels: product names and store names.
//!
//! Labels are kept exactly as entered. "Apples", "apples" and " apples" are
//! three different products; no case folding or trimming is applied. The only
//! rules are that a label has visible content and a bounded length.

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a label.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The input is empty or whitespace only.
    #[error("{field} cannot be empty")]
    Empty {
        /// Which field was being parsed.
        field: &'static str,
    },
    /// The input is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Which field was being parsed.
        field: &'static str,
        /// Maximum allowed length.
        max: usize,
    },
}

/// Maximum length of a label, in characters.
pub const MAX_LABEL_LENGTH: usize = 200;

fn check_label(s: &str, field: &'static str) -> Result<(), LabelError> {
    if s.trim().is_empty() {
        return Err(LabelError::Empty { field });
    }

    if s.chars().count() > MAX_LABEL_LENGTH {
        return Err(LabelError::TooLong {
            field,
            max: MAX_LABEL_LENGTH,
        });
    }

    Ok(())
}

macro_rules! define_label {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Parse a label, keeping the input verbatim.
            ///
            /// # Errors
            ///
            /// Returns [`LabelError::Empty`] for blank input and
            /// [`LabelError::TooLong`] for input over [`MAX_LABEL_LENGTH`] characters.
            pub fn parse(s: &str) -> Result<Self, LabelError> {
                check_label(s, $field)?;
                Ok(Self(s.to_owned()))
            }

            /// Returns the label as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(&self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = LabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_label!(
    /// Name of a purchased product, e.g. "apples".
    ProductName,
    "product name"
);

define_label!(
    /// Name of the retailer, e.g. "auchan" or "pingodoce".
    StoreName,
    "store name"
);
