//! The save / edit / delete / import / export workflow over a repository.
//!
//! Every operation either completes or returns an error with the store and
//! the edit state untouched.

use std::path::{Path, PathBuf};

use crate::io::{self, IoError};
use crate::models::{RecordId, TestCaseRecord, steps_of};
use crate::parsing::FALLBACK_TITLE;
use crate::store::{ScenarioRepository, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum WorkbenchError {
    #[error("Cannot save an empty test scenario")]
    EmptyContent,
    #[error("There are no test scenarios to export")]
    NothingToExport,
    #[error("Unknown test scenario: {0}")]
    UnknownRecord(RecordId),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] IoError),
}

/// What [`Workbench::save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(RecordId),
    Updated(RecordId),
}

impl SaveOutcome {
    pub fn id(self) -> RecordId {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }
}

/// What [`Workbench::delete`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub removed: TestCaseRecord,
    /// The deleted record was being edited; the editor should be cleared.
    pub was_editing: bool,
}

pub struct Workbench<R: ScenarioRepository> {
    repo: R,
    editing: Option<RecordId>,
    fallback_title: String,
}

impl<R: ScenarioRepository> Workbench<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            editing: None,
            fallback_title: FALLBACK_TITLE.to_string(),
        }
    }

    /// Uses `title` for records without a `Scenario:` name.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    pub fn records(&self) -> &[TestCaseRecord] {
        self.repo.list()
    }

    pub fn record(&self, id: RecordId) -> Option<&TestCaseRecord> {
        self.repo.get(id)
    }

    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    /// Saves `content`: updates the record being edited, or creates a new
    /// one. Finishing an update ends the edit.
    pub fn save(&mut self, content: &str) -> Result<SaveOutcome, WorkbenchError> {
        if content.trim().is_empty() {
            log::warn!("refusing to save empty scenario");
            return Err(WorkbenchError::EmptyContent);
        }

        match self.editing {
            Some(id) => {
                let mut record = self
                    .repo
                    .get(id)
                    .cloned()
                    .ok_or(WorkbenchError::UnknownRecord(id))?;
                record.set_content(content, &self.fallback_title);
                self.repo.save(record)?;
                self.editing = None;
                Ok(SaveOutcome::Updated(id))
            }
            None => {
                let record = TestCaseRecord::new(content, &self.fallback_title);
                let id = record.id;
                self.repo.save(record)?;
                Ok(SaveOutcome::Created(id))
            }
        }
    }

    /// Starts editing `id` and returns the content to load into the editor.
    pub fn begin_edit(&mut self, id: RecordId) -> Result<&str, WorkbenchError> {
        let record = self.repo.get(id).ok_or(WorkbenchError::UnknownRecord(id))?;
        self.editing = Some(id);
        Ok(&record.content)
    }

    /// Deletes `id`, ending the edit if it was the record being edited.
    pub fn delete(&mut self, id: RecordId) -> Result<DeleteOutcome, WorkbenchError> {
        let removed = self.repo.delete(id).map_err(|e| match e {
            StoreError::NotFound(id) => WorkbenchError::UnknownRecord(id),
            other => other.into(),
        })?;
        let was_editing = self.editing == Some(id);
        if was_editing {
            self.editing = None;
        }
        Ok(DeleteOutcome {
            removed,
            was_editing,
        })
    }

    /// Splits `blob` into scenarios and stores them all. Returns how many
    /// were added; a blob with no scenarios adds none.
    pub fn import_text(&mut self, blob: &str) -> Result<usize, WorkbenchError> {
        let records = TestCaseRecord::batch_from_import(blob, &self.fallback_title);
        if records.is_empty() {
            log::debug!("import contained no scenarios");
            return Ok(0);
        }
        Ok(self.repo.import_batch(records)?)
    }

    /// Reads a `.feature` / `.txt` file and imports its scenarios.
    pub fn import_file(&mut self, path: &Path) -> Result<usize, WorkbenchError> {
        let blob = io::read_scenario_file(path)?;
        let added = self.import_text(&blob)?;
        log::info!("imported {added} scenario(s) from {}", path.display());
        Ok(added)
    }

    /// Reads every file in `paths` and imports all their scenarios as one
    /// batch. If any file cannot be read, nothing is stored.
    pub fn import_files(&mut self, paths: &[PathBuf]) -> Result<usize, WorkbenchError> {
        let mut records = vec![];
        for path in paths {
            let blob = io::read_scenario_file(path)?;
            records.extend(TestCaseRecord::batch_from_import(&blob, &self.fallback_title));
        }
        if records.is_empty() {
            log::debug!("{} file(s) contained no scenarios", paths.len());
            return Ok(0);
        }
        let added = self.repo.import_batch(records)?;
        log::info!("imported {added} scenario(s) from {} file(s)", paths.len());
        Ok(added)
    }

    /// The export file body.
    pub fn export_content(&self) -> Result<String, WorkbenchError> {
        let records = self.repo.list();
        if records.is_empty() {
            return Err(WorkbenchError::NothingToExport);
        }
        Ok(io::export_content(records))
    }

    /// Writes every record to `path`. Returns how many were written.
    pub fn export_to(&self, path: &Path) -> Result<usize, WorkbenchError> {
        let content = self.export_content()?;
        io::write_file(path, &content)?;
        let count = self.repo.list().len();
        log::info!("exported {count} scenario(s) to {}", path.display());
        Ok(count)
    }

    /// Distinct step lines across all records, for autocomplete.
    pub fn steps(&self) -> Vec<String> {
        steps_of(self.repo.list())
    }
}
