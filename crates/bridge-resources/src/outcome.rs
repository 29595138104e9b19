//! Per-entry outcomes of enumeration and materialization

use std::fmt;
use std::path::PathBuf;

/// What happened to one resource entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    /// Content was read into the resource map
    Read,
    /// Content was written to the given file
    Written(PathBuf),
    /// The entry was skipped; processing continued with the next one
    Skipped(String),
}

/// Outcome for a single named entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub name: String,
    pub status: EntryStatus,
}

impl EntryOutcome {
    pub fn read(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: EntryStatus::Read,
        }
    }

    pub fn written(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            status: EntryStatus::Written(path.into()),
        }
    }

    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: EntryStatus::Skipped(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self.status, EntryStatus::Skipped(_))
    }

    /// The reason an entry was skipped.
    pub fn reason(&self) -> Option<&str> {
        match &self.status {
            EntryStatus::Skipped(reason) => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            EntryStatus::Read => write!(f, "read {}", self.name),
            EntryStatus::Written(path) => write!(f, "wrote {} to {}", self.name, path.display()),
            EntryStatus::Skipped(reason) => write!(f, "skipped {}: {}", self.name, reason),
        }
    }
}
