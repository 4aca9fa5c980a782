use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::parsing::{extract_title_or, split_scenarios, steps::extract_steps};

/// Unique identifier of a stored scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A stored scenario document with its derived title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseRecord {
    pub id: RecordId,
    pub title: String,
    pub content: String,
}

impl TestCaseRecord {
    /// Creates a record with a new id, deriving the title from `content`.
    pub fn new(content: impl Into<String>, fallback_title: &str) -> Self {
        let content = content.into();
        Self {
            id: RecordId::new(),
            title: extract_title_or(&content, fallback_title),
            content,
        }
    }

    /// Replaces the content and re-derives the title. The id is kept.
    pub fn set_content(&mut self, content: impl Into<String>, fallback_title: &str) {
        self.content = content.into();
        self.title = extract_title_or(&self.content, fallback_title);
    }

    /// Builds one record per scenario found in an import blob.
    pub fn batch_from_import(blob: &str, fallback_title: &str) -> Vec<Self> {
        split_scenarios(blob)
            .into_iter()
            .map(|document| Self::new(document, fallback_title))
            .collect()
    }
}

/// Distinct step lines across `records`, in first-seen order.
pub fn steps_of(records: &[TestCaseRecord]) -> Vec<String> {
    extract_steps(records.iter().map(|r| r.content.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::FALLBACK_TITLE;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn new_record_derives_title() {
        let record = TestCaseRecord::new("Scenario: Checkout\nGiven a cart", FALLBACK_TITLE);
        assert_eq!(record.title, "Checkout");
        assert_eq!(record.content, "Scenario: Checkout\nGiven a cart");
    }

    #[test]
    fn set_content_keeps_id_and_updates_title() {
        let mut record = TestCaseRecord::new("Scenario: Old", FALLBACK_TITLE);
        let id = record.id;
        record.set_content("Given no title", FALLBACK_TITLE);
        assert_eq!(record.id, id);
        assert_eq!(record.title, FALLBACK_TITLE);
    }

    #[test]
    fn import_batch_gets_unique_ids() {
        let blob = (0..50)
            .map(|i| format!("Scenario: S{i}\nGiven x"))
            .collect::<Vec<_>>()
            .join("\n\n");
        let records = TestCaseRecord::batch_from_import(&blob, FALLBACK_TITLE);

        assert_eq!(records.len(), 50);
        let ids: HashSet<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(records[7].title, "S7");
    }

    #[test]
    fn record_id_round_trips_through_text() {
        let id = RecordId::new();
        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<RecordId>().is_err());
    }

    #[test]
    fn record_serializes_with_plain_string_id() {
        let record = TestCaseRecord::new("Scenario: A", FALLBACK_TITLE);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], serde_json::Value::String(record.id.to_string()));
        assert_eq!(json["title"], "A");
    }

    #[test]
    fn steps_of_records() {
        let records = vec![
            TestCaseRecord::new("Scenario: A\nGiven x\nWhen y", FALLBACK_TITLE),
            TestCaseRecord::new("Scenario: B\nGiven x\nThen z", FALLBACK_TITLE),
        ];
        assert_eq!(steps_of(&records), vec!["Given x", "When y", "Then z"]);
    }
}
