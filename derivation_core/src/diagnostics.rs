//! Structured diagnostics emitted while a pipeline processes its items.
//!
//! Every entry is kept for the run report and forwarded to `tracing` as it is recorded.

use magic_records::RecordId;
use serde::{Deserialize, Serialize};

use crate::error::Stage;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// One diagnostic line about one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: Level,
    pub item: RecordId,
    pub stage: Stage,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.level {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        write!(f, "{}: {} [{}] {}", level, self.item, self.stage, self.message)
    }
}

/// Ordered collection of diagnostics for one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and emit it as a tracing event.
    pub fn record(&mut self, level: Level, item: &RecordId, stage: Stage, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            level,
            item: item.clone(),
            stage,
            message: message.into(),
        };

        match level {
            Level::Info => tracing::info!(item = %diagnostic.item, stage = %stage, "{}", diagnostic.message),
            Level::Warn => tracing::warn!(item = %diagnostic.item, stage = %stage, "{}", diagnostic.message),
            Level::Error => tracing::error!(item = %diagnostic.item, stage = %stage, "{}", diagnostic.message),
        }

        self.entries.push(diagnostic);
    }

    pub fn info(&mut self, item: &RecordId, stage: Stage, message: impl Into<String>) {
        self.record(Level::Info, item, stage, message);
    }

    pub fn warn(&mut self, item: &RecordId, stage: Stage, message: impl Into<String>) {
        self.record(Level::Warn, item, stage, message);
    }

    /// All diagnostics in the order they were recorded.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Diagnostics about one item.
    pub fn for_item<'a>(&'a self, item: &'a RecordId) -> impl Iterator<Item = &'a Diagnostic> {
        self.entries.iter().filter(move |d| &d.item == item)
    }

    /// Number of diagnostics at a given level.
    pub fn count(&self, level: Level) -> usize {
        self.entries.iter().filter(|d| d.level == level).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
