//! Append-only reading history with export.
//!
//! The original web app kept the "current reading" in browser storage and
//! read it back implicitly; here the history is explicit session state.
//! Every cast appends a record; the current reading is simply the last one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::method::Method;
use crate::reading::Reading;

/// One recorded reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique record id.
    pub id: Uuid,
    /// The question the querent asked, if any.
    pub question: Option<String>,
    /// The method used.
    pub method: Method,
    /// The full reading.
    pub reading: Reading,
    /// When the cast was made.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Record a reading made now.
    pub fn new(reading: Reading, question: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question,
            method: reading.method,
            reading,
            timestamp: Utc::now(),
        }
    }

    /// One-line summary: number, name, and transformation if present.
    pub fn summary(&self) -> String {
        let primary = self.reading.primary();
        let mut out = format!("{} {}", primary.number(), primary.info().name);
        if let Some(transformed) = self.reading.transformed() {
            out.push_str(&format!(
                " → {} {}",
                transformed.number(),
                transformed.info().name
            ));
        }
        out
    }
}

/// A chronological log of readings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the history as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Reading History\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "## {} ({})\n\n",
                entry.summary(),
                entry.timestamp.format("%Y-%m-%d %H:%M UTC")
            ));
            if let Some(question) = &entry.question {
                out.push_str(&format!("**Question**: {question}\n\n"));
            }
            out.push_str(&format!("```\n{}\n```\n\n", entry.reading));
        }
        out
    }

    /// Export the history as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Reading History\n===============\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "{} ({})\n",
                entry.summary(),
                entry.timestamp.format("%Y-%m-%d %H:%M UTC")
            ));
            if let Some(question) = &entry.question {
                out.push_str(&format!("Question: {question}\n"));
            }
            out.push_str(&format!("{}\n\n", entry.reading));
        }
        out
    }
}
