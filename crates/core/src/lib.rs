//! Grocereasy Core - Domain types for the grocery price ledger.
//!
//! This crate provides the types shared by every Grocereasy component:
//! - `ledger` - SQLite-backed append-only store of grocery entries
//! - `cli` - Command-line front end for recording and listing purchases
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database
//! access. Raw form input is turned into a [`NewGroceryEntry`] by
//! [`RawEntry::validate`], so nothing malformed ever reaches storage.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, names, units, volumes, prices, and dates
//! - [`entry`] - Grocery entry records and boundary validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entry;
pub mod types;

pub use entry::{EntryError, GroceryEntry, NewGroceryEntry, RawEntry};
pub use types::*;
