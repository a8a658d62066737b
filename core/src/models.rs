use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single line of the notes file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note(String);

impl Note {
    /// Wrap `content` as a note, refusing anything with a line terminator in it
    pub fn new(content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        if content.contains(['\n', '\r']) {
            return Err(Error::LineBreak);
        }
        Ok(Note(content))
    }

    /// A line read back from storage, already split on line terminators
    pub(crate) fn from_stored(line: String) -> Self {
        Note(line)
    }

    pub fn content(&self) -> &str {
        &self.0
    }

    pub fn into_content(self) -> String {
        self.0
    }

    /// ASCII case-insensitive substring match; an empty query matches every note
    pub fn matches(&self, query: &str) -> bool {
        self.0
            .to_ascii_lowercase()
            .contains(&query.to_ascii_lowercase())
    }
}

/// A note paired with its 1-based position in the full list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub position: usize,
    pub content: String,
}

impl Entry {
    pub fn new(position: usize, content: impl Into<String>) -> Self {
        Entry {
            position,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Content was empty or only whitespace
    EmptyContent,
    /// Content contained a line terminator
    LineBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The note that was taken out of the list
    Removed(Note),
    OutOfRange { position: i64, count: usize },
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
}
