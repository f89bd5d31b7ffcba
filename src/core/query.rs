//! Query entries and batches submitted to the registry.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::inn::Inn;

/// Date format the registry expects (`dd.mm.yyyy`).
pub const WIRE_DATE_FORMAT: &str = "%d.%m.%Y";

/// The date attached to every entry at resolution time: today, local time.
pub fn request_date() -> NaiveDate {
    Local::now().date_naive()
}

/// One INN plus the date the registration status is asked for.
///
/// Created at resolution time, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEntry {
    pub inn: Inn,
    pub date: NaiveDate,
}

impl QueryEntry {
    pub fn new(inn: Inn, date: NaiveDate) -> Self {
        Self { inn, date }
    }

    /// The entry date as the registry expects it.
    pub fn wire_date(&self) -> String {
        self.date.format(WIRE_DATE_FORMAT).to_string()
    }
}

/// Unique entries submitted to the registry in one call.
///
/// Uniqueness is by INN; entry order is preserved but carries no meaning.
/// An empty batch is never submitted (the session loop skips the call).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryBatch {
    entries: Vec<QueryEntry>,
}

impl QueryBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a batch from already-validated entries.
    ///
    /// Purely structural; duplicate INNs collapse to the first occurrence.
    pub fn from_entries(entries: impl IntoIterator<Item = QueryEntry>) -> Self {
        let mut batch = Self::new();
        for entry in entries {
            batch.push(entry);
        }
        batch
    }

    /// Add an entry unless its INN is already present.
    ///
    /// Returns whether the entry was added.
    pub fn push(&mut self, entry: QueryEntry) -> bool {
        if self.entries.iter().any(|e| e.inn == entry.inn) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[QueryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
