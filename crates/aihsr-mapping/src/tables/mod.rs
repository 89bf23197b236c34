//! Static AIHSR mapping tables
//!
//! Three compiled-in tables drive every rewrite:
//! - subcategory -> lifecycle phases
//! - subcategory -> technology types (or the `all` sentinel)
//! - risk -> control subcategories
//!
//! The tables are process-wide and read-only. Lookups go through
//! [`MappingTable`], which keeps declaration order for iteration.

mod phases;
mod risk_controls;
mod tech_types;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Design phase tag
pub const PHASE_1: &str = "phase-1";
/// Validation phase tag
pub const PHASE_2: &str = "phase-2";
/// Deployment phase tag
pub const PHASE_3: &str = "phase-3";

/// Every phase tag, in lifecycle order
pub const PHASE_TAGS: [&str; 3] = [PHASE_1, PHASE_2, PHASE_3];

/// Sentinel tech type meaning "applies to every technology type"
pub const ALL_TECH_TYPES: &str = "all";

/// Tech-type vocabulary used by the tables (excluding the `all` sentinel)
pub const TECH_TYPE_TAGS: [&str; 10] = [
    "llm",
    "generative-non-llm",
    "multi-modal",
    "foundation",
    "reinforcement-learning",
    "predictive",
    "classification",
    "recommendation",
    "computer-vision",
    "supervised-ml",
];

/// Insertion-ordered map from an identifier to its assigned tags
#[derive(Debug)]
pub struct MappingTable {
    name: &'static str,
    entries: IndexMap<&'static str, &'static [&'static str]>,
}

impl MappingTable {
    fn from_entries(name: &'static str, entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self {
            name,
            entries: entries.iter().copied().collect(),
        }
    }

    /// Human-readable table name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Tags assigned to `key`, if the table has an entry for it
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static [&'static str]> {
        self.entries.get(key).copied()
    }

    /// Whether the table has an entry for `key`
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    /// Entries sorted by key
    #[must_use]
    pub fn sorted(&self) -> Vec<(&'static str, &'static [&'static str])> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }

    /// Sum of the lengths of every tag list
    #[must_use]
    pub fn total_assignments(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }
}

/// Subcategory -> phase tags
pub static SUBCATEGORY_PHASES: Lazy<MappingTable> =
    Lazy::new(|| MappingTable::from_entries("subcategory phases", phases::ENTRIES));

/// Subcategory -> tech-type tags
pub static SUBCATEGORY_TECH_TYPES: Lazy<MappingTable> =
    Lazy::new(|| MappingTable::from_entries("subcategory tech types", tech_types::ENTRIES));

/// Risk -> control subcategories
pub static RISK_CONTROL_SUBCATEGORIES: Lazy<MappingTable> =
    Lazy::new(|| MappingTable::from_entries("risk control subcategories", risk_controls::ENTRIES));

/// Whether a tech-type list is the `["all"]` sentinel
#[inline]
#[must_use]
pub fn is_all_tech_types(tags: &[&str]) -> bool {
    tags == [ALL_TECH_TYPES]
}
