//! Sorted, immutable collection of extension records

use serde_json::{Map, Value};

use crate::classify::{CategoryBreakdown, DuplicateGroup, find_duplicates};
use crate::record::ExtensionRecord;

/// Extension records sorted by display name.
///
/// Built once per run. Category and duplicate views borrow from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<ExtensionRecord>,
}

impl Inventory {
    /// Normalize raw inventory entries and sort them by name.
    ///
    /// Entries whose value is not a JSON object are skipped. The sort is
    /// stable, so equal names keep the entries' original order.
    pub fn from_entries(entries: &Map<String, Value>) -> Self {
        let mut records: Vec<ExtensionRecord> = Vec::with_capacity(entries.len());
        for (id, value) in entries {
            match ExtensionRecord::from_entry(id, value) {
                Some(record) => records.push(record),
                None => tracing::debug!(id = %id, "skipping non-object inventory entry"),
            }
        }

        Self::from_records(records)
    }

    /// Wrap already-normalized records, sorting them by name.
    pub fn from_records(mut records: Vec<ExtensionRecord>) -> Self {
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Self { records }
    }

    pub fn records(&self) -> &[ExtensionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Disabled records in listing order.
    pub fn disabled(&self) -> Vec<&ExtensionRecord> {
        self.records.iter().filter(|r| !r.enabled).collect()
    }

    pub fn categories(&self) -> CategoryBreakdown<'_> {
        CategoryBreakdown::classify(&self.records)
    }

    pub fn duplicates(&self) -> Vec<DuplicateGroup<'_>> {
        find_duplicates(&self.records)
    }
}
