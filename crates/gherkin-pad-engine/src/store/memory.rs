use super::{ScenarioRepository, StoreError, with_appended, with_saved, without};
use crate::models::{RecordId, TestCaseRecord};

/// Volatile store, for tests and for sessions that never touch disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<TestCaseRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScenarioRepository for MemoryStore {
    fn list(&self) -> &[TestCaseRecord] {
        &self.records
    }

    fn save(&mut self, record: TestCaseRecord) -> Result<(), StoreError> {
        self.records = with_saved(&self.records, record);
        Ok(())
    }

    fn delete(&mut self, id: RecordId) -> Result<TestCaseRecord, StoreError> {
        let (next, removed) = without(&self.records, id)?;
        self.records = next;
        Ok(removed)
    }

    fn import_batch(&mut self, records: Vec<TestCaseRecord>) -> Result<usize, StoreError> {
        let added = records.len();
        self.records = with_appended(&self.records, records);
        Ok(added)
    }
}
