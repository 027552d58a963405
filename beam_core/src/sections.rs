//! # Section Capacity Table
//!
//! Allowable moment and shear capacities for the supported beam sections.
//! This holds all capacities in memory for fast lookup, indexed by section
//! identifier.
//!
//! The standard table is built once behind a [`Lazy`] and is read-only
//! afterwards, so it can be shared across threads without locking.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::sections::SECTIONS;
//!
//! let delta = SECTIONS.lookup("delta").unwrap();
//! assert_eq!(delta.moment_capacity_kipft, 200.0);
//! assert_eq!(delta.shear_capacity_kip, 150.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, CheckResult};

/// Maximum allowable point load (kip) for the informational load check
pub const MAX_POINT_LOAD_KIP: f64 = 100.0;

/// Allowable capacities for a single beam section.
///
/// Moment capacity is in kip-ft, shear capacity in kip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionCapacity {
    /// Allowable bending moment (kip-ft)
    pub moment_capacity_kipft: f64,

    /// Allowable shear force (kip)
    pub shear_capacity_kip: f64,
}

impl SectionCapacity {
    /// Create a capacity pair
    pub fn new(moment_capacity_kipft: f64, shear_capacity_kip: f64) -> Self {
        Self {
            moment_capacity_kipft,
            shear_capacity_kip,
        }
    }
}

impl std::fmt::Display for SectionCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "M={} kip-ft, V={} kip",
            self.moment_capacity_kipft, self.shear_capacity_kip
        )
    }
}

/// Capacity table indexed by section identifier.
///
/// Use [`SectionTable::standard`] (or the shared [`SECTIONS`] instance)
/// for the built-in sections, or build a custom table with [`insert`].
///
/// [`insert`]: SectionTable::insert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionTable {
    /// Capacities indexed by section identifier
    sections: HashMap<String, SectionCapacity>,
}

impl SectionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard table of supported sections.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert("alpha", SectionCapacity::new(20.0, 40.0));
        table.insert("bravo", SectionCapacity::new(50.0, 60.0));
        table.insert("charlie", SectionCapacity::new(100.0, 80.0));
        table.insert("delta", SectionCapacity::new(200.0, 150.0));
        table
    }

    /// Add or replace a section entry
    pub fn insert(&mut self, section_id: impl Into<String>, capacity: SectionCapacity) {
        self.sections.insert(section_id.into(), capacity);
    }

    /// Look up the capacities for a section.
    ///
    /// Fails with [`CheckError::UnknownSection`] when the identifier has
    /// no entry.
    pub fn lookup(&self, section_id: &str) -> CheckResult<SectionCapacity> {
        self.sections
            .get(section_id)
            .copied()
            .ok_or_else(|| CheckError::unknown_section(section_id))
    }

    /// Check whether a section identifier is registered
    pub fn contains(&self, section_id: &str) -> bool {
        self.sections.contains_key(section_id)
    }

    /// All registered section identifiers, sorted for stable display
    pub fn section_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Shared standard table, built on first use and read-only afterwards.
pub static SECTIONS: Lazy<SectionTable> = Lazy::new(SectionTable::standard);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_entries() {
        let table = SectionTable::standard();
        assert_eq!(table.len(), 4);
        assert_eq!(table.lookup("alpha").unwrap(), SectionCapacity::new(20.0, 40.0));
        assert_eq!(table.lookup("bravo").unwrap(), SectionCapacity::new(50.0, 60.0));
        assert_eq!(table.lookup("charlie").unwrap(), SectionCapacity::new(100.0, 80.0));
        assert_eq!(table.lookup("delta").unwrap(), SectionCapacity::new(200.0, 150.0));
    }

    #[test]
    fn test_lookup_unknown_section() {
        let result = SECTIONS.lookup("omega");
        assert_eq!(result, Err(CheckError::unknown_section("omega")));
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let first = SECTIONS.lookup("charlie").unwrap();
        let second = SECTIONS.lookup("charlie").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_table_insert() {
        let mut table = SectionTable::new();
        assert!(table.is_empty());
        assert!(!table.contains("echo"));

        table.insert("echo", SectionCapacity::new(300.0, 200.0));
        assert!(table.contains("echo"));
        assert_eq!(table.lookup("echo").unwrap().shear_capacity_kip, 200.0);
    }

    #[test]
    fn test_section_ids_sorted() {
        let table = SectionTable::standard();
        assert_eq!(table.section_ids(), vec!["alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_table_serialization() {
        let table = SectionTable::standard();
        let json = serde_json::to_string(&table).unwrap();
        let roundtrip: SectionTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, roundtrip);
    }
}
