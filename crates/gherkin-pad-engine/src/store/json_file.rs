use std::fs;
use std::path::PathBuf;

use super::{ScenarioRepository, StoreError, with_appended, with_saved, without};
use crate::models::{RecordId, TestCaseRecord};

/// Records kept as one JSON array in a single file.
///
/// The whole list is rewritten on every change through a sibling temp file
/// and a rename, so readers never see a half-written store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<TestCaseRecord>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store; it is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content).map_err(|source| StoreError::Decode {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            Vec::new()
        };
        log::info!("opened record store {} ({} records)", path.display(), records.len());
        Ok(Self { path, records })
    }

    /// Writes `next` to disk and, on success, makes it the current list.
    fn commit(&mut self, next: Vec<TestCaseRecord>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&next).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;

        log::info!("wrote {} records to {}", next.len(), self.path.display());
        self.records = next;
        Ok(())
    }
}

impl ScenarioRepository for JsonFileStore {
    fn list(&self) -> &[TestCaseRecord] {
        &self.records
    }

    fn save(&mut self, record: TestCaseRecord) -> Result<(), StoreError> {
        let next = with_saved(&self.records, record);
        self.commit(next)
    }

    fn delete(&mut self, id: RecordId) -> Result<TestCaseRecord, StoreError> {
        let (next, removed) = without(&self.records, id)?;
        self.commit(next)?;
        Ok(removed)
    }

    fn import_batch(&mut self, records: Vec<TestCaseRecord>) -> Result<usize, StoreError> {
        let added = records.len();
        let next = with_appended(&self.records, records);
        self.commit(next)?;
        Ok(added)
    }
}
