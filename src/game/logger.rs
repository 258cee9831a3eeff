//! Verbosity-leveled event log
//!
//! Records every intent the engine processes and its outcome. Entries are
//! kept in an in-memory buffer so tests and tooling can inspect what
//! happened; stdout echo is controlled by the verbosity level.

use serde::{Deserialize, Serialize};

/// How much the engine prints while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum VerbosityLevel {
    /// No output at all.
    Silent,
    /// Rejections and game-over only.
    Minimal,
    /// Every processed intent.
    #[default]
    Normal,
    /// Intents plus full table dumps.
    Verbose,
}

/// One recorded event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
}

/// Buffered event log with optional stdout echo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    verbosity: VerbosityLevel,
    echo: bool,
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        EventLog {
            verbosity,
            echo: true,
            entries: Vec::new(),
        }
    }

    /// A log that only buffers, never prints. Used by tests.
    pub fn buffered(verbosity: VerbosityLevel) -> Self {
        EventLog {
            verbosity,
            echo: false,
            entries: Vec::new(),
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    /// Record a message at the given level. Messages above the configured
    /// verbosity are dropped entirely, not just silenced.
    pub fn log(&mut self, level: VerbosityLevel, message: impl Into<String>) {
        if level > self.verbosity {
            return;
        }
        let entry = LogEntry {
            level,
            message: message.into(),
        };
        if self.echo {
            println!("{}", entry.message);
        }
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        EventLog::new(VerbosityLevel::Normal)
    }
}
