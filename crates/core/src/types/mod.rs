//! Core types for Grocereasy.
//!
//! This module provides type-safe wrappers for the fields of a grocery entry.

pub mod date;
pub mod id;
pub mod label;
pub mod price;
pub mod unit;
pub mod volume;

pub use date::{DateError, EntryDate};
pub use id::*;
pub use label::{LabelError, ProductName, StoreName};
pub use price::{Price, PriceError};
pub use unit::{Unit, UnitError};
pub use volume::{UnitVolume, VolumeError};
