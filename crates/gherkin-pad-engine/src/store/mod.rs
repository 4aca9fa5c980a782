//! Persistence of [`TestCaseRecord`]s behind a small repository interface.
//!
//! Stores hold a flat, ordered list of records. Every mutating call builds
//! the next list first and only replaces the current one once it has been
//! persisted, so a failed call leaves the store unchanged.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::models::{RecordId, TestCaseRecord};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(RecordId),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode record store at {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to encode records: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Storage backend for scenario records.
pub trait ScenarioRepository {
    /// All records, in insertion order.
    fn list(&self) -> &[TestCaseRecord];

    /// Inserts `record`, or replaces the stored record with the same id in
    /// place.
    fn save(&mut self, record: TestCaseRecord) -> Result<(), StoreError>;

    /// Removes and returns the record with `id`.
    fn delete(&mut self, id: RecordId) -> Result<TestCaseRecord, StoreError>;

    /// Appends all `records` in one step. Returns how many were added.
    fn import_batch(&mut self, records: Vec<TestCaseRecord>) -> Result<usize, StoreError>;

    fn get(&self, id: RecordId) -> Option<&TestCaseRecord> {
        self.list().iter().find(|r| r.id == id)
    }
}

/// The list after upserting `record`.
fn with_saved(records: &[TestCaseRecord], record: TestCaseRecord) -> Vec<TestCaseRecord> {
    let mut next = records.to_vec();
    match next.iter_mut().find(|r| r.id == record.id) {
        Some(existing) => *existing = record,
        None => next.push(record),
    }
    next
}

/// The list without `id`, plus the removed record.
fn without(
    records: &[TestCaseRecord],
    id: RecordId,
) -> Result<(Vec<TestCaseRecord>, TestCaseRecord), StoreError> {
    let index = records
        .iter()
        .position(|r| r.id == id)
        .ok_or(StoreError::NotFound(id))?;
    let mut next = records.to_vec();
    let removed = next.remove(index);
    Ok((next, removed))
}

fn with_appended(records: &[TestCaseRecord], batch: Vec<TestCaseRecord>) -> Vec<TestCaseRecord> {
    let mut next = records.to_vec();
    next.extend(batch);
    next
}
