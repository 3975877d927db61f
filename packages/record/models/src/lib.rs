#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Owner record and validation summary types.
//!
//! This crate defines the canonical extraction result shared by the parser,
//! the source layer, and the batch driver. An [`OwnerRecord`] is one row of
//! the owner list recovered from a registry certified copy; a
//! [`ValidationSummary`] describes a full aggregated batch of them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One owner entry recovered from a registry owner-list table.
///
/// Immutable once emitted: the parser finalizes a record exactly once and
/// never re-opens it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerRecord {
    /// Holder name from the rightmost table column.
    pub name: String,
    /// Always empty at extraction time. Reserved for the downstream
    /// per-row postal-code lookup that runs outside this system.
    pub postal_code: String,
    /// Address lines joined with single spaces, in source line order.
    pub address: String,
    /// Jurisdiction printed once in the document header. Empty when the
    /// header carries none.
    pub location: String,
}

impl OwnerRecord {
    /// Creates a record with the postal code left empty for the
    /// downstream lookup.
    #[must_use]
    pub const fn new(name: String, address: String, location: String) -> Self {
        Self {
            name,
            postal_code: String::new(),
            address,
            location,
        }
    }
}

/// Counts computed once over a full aggregated record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Total number of records in the batch.
    pub total_records: u64,
    /// Number of distinct address strings.
    pub unique_addresses: u64,
    /// Number of distinct holder names.
    pub unique_names: u64,
    /// Number of records equal to an earlier record in every field.
    pub duplicate_records: u64,
}

impl ValidationSummary {
    /// Computes the summary over `records`.
    #[must_use]
    pub fn compute(records: &[OwnerRecord]) -> Self {
        let mut addresses = HashSet::new();
        let mut names = HashSet::new();
        let mut seen = HashSet::new();
        let mut duplicate_records: u64 = 0;

        for record in records {
            addresses.insert(record.address.as_str());
            names.insert(record.name.as_str());
            if !seen.insert(record) {
                duplicate_records += 1;
            }
        }

        Self {
            total_records: records.len() as u64,
            unique_addresses: addresses.len() as u64,
            unique_names: names.len() as u64,
            duplicate_records,
        }
    }
}
