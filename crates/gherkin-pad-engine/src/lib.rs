pub mod editor;
pub mod io;
pub mod models;
pub mod parsing;
pub mod store;
pub mod workbench;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editor::{Deletion, EditorBuffer, SCENARIO_PREFIX};
pub use io::IoError;
pub use models::{RecordId, TestCaseRecord};
pub use parsing::{
    FALLBACK_TITLE, Keyword, LineFragment, LineToken, Segment, SpanStyle, StyledSpan,
    extract_steps, extract_title, match_prefix, render, render_html, split_scenarios, tokenize,
};
pub use store::{JsonFileStore, MemoryStore, ScenarioRepository, StoreError};
pub use workbench::{DeleteOutcome, SaveOutcome, Workbench, WorkbenchError};
