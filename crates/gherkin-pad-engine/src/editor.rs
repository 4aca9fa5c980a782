//! The text being edited, with the live-typing rules of the editor surface.
//!
//! Typed input always starts with [`SCENARIO_PREFIX`]. Content loaded from a
//! saved record goes through [`EditorBuffer::load`] instead and is kept
//! verbatim, whatever its first line.

use crate::parsing::{
    Keyword, LineFragment, current_fragment, highlight::render, suggest::suggestions,
};

/// Text every typed buffer begins with.
pub const SCENARIO_PREFIX: &str = "Scenario: ";

/// Which way a deletion key removes text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// Backspace: removes the character before the cursor.
    Backward,
    /// Delete: removes the character after the cursor.
    Forward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    text: String,
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self {
            text: SCENARIO_PREFIX.to_string(),
        }
    }
}

impl EditorBuffer {
    /// A fresh buffer holding only the prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding saved content exactly as stored.
    pub fn load(content: impl Into<String>) -> Self {
        Self {
            text: content.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the buffer with what the user typed, restoring the prefix if
    /// the edit removed it.
    pub fn on_input(&mut self, typed: &str) {
        self.text = if typed.starts_with(SCENARIO_PREFIX) {
            typed.to_string()
        } else {
            format!("{SCENARIO_PREFIX}{typed}")
        };
    }

    /// Back to the empty-scenario state.
    pub fn reset(&mut self) {
        self.text = SCENARIO_PREFIX.to_string();
    }

    /// Whether a deletion at byte `cursor` leaves the prefix intact.
    pub fn allows_deletion(&self, kind: Deletion, cursor: usize) -> bool {
        let protected = SCENARIO_PREFIX.len();
        if !self.text.starts_with(SCENARIO_PREFIX) {
            return true;
        }
        match kind {
            Deletion::Backward => cursor > protected,
            Deletion::Forward => cursor >= protected,
        }
    }

    pub fn highlighted(&self) -> Vec<LineFragment<'_>> {
        render(&self.text)
    }

    /// Keyword suggestions for the word ending at byte `cursor`.
    pub fn suggestions_at(&self, cursor: usize) -> Vec<Keyword> {
        suggestions(current_fragment(self.before(cursor)))
    }

    /// Replaces the word ending at `cursor` with the best suggestion and a
    /// trailing space. Returns the new cursor position.
    pub fn accept_suggestion(&mut self, cursor: usize) -> Option<usize> {
        let before = self.before(cursor);
        let fragment = current_fragment(before);
        let keyword = suggestions(fragment).into_iter().next()?;

        let start = before.len() - fragment.len();
        let end = before.len();
        let completion = format!("{keyword} ");
        self.text.replace_range(start..end, &completion);
        Some(start + completion.len())
    }

    fn before(&self, cursor: usize) -> &str {
        self.text.get(..cursor).unwrap_or(&self.text)
    }
}
