//! Physical resource sources, one per bundle layout.

mod archive;
mod directory;

pub use archive::ArchiveSource;
pub use directory::DirectorySource;

use crate::Result;
use crate::catalog::CatalogReport;

/// A physical store of bundled resources.
///
/// Implementations record per-entry failures in the report and keep going;
/// an `Err` return means the store could not be opened at all.
pub trait ResourceSource: std::fmt::Debug {
    /// Add every resource accepted by `filter` to `report`.
    fn collect(&self, filter: &EntryFilter, report: &mut CatalogReport) -> Result<()>;

    /// Read one resource by its full logical name.
    fn read(&self, name: &str) -> Result<String>;
}

/// Prefix and extension filter applied to logical resource names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFilter {
    prefix: String,
    extension: String,
}

impl EntryFilter {
    /// `prefix` gains a trailing `/` and loses any leading one; `extension`
    /// is compared case-insensitively.
    pub fn new(prefix: &str, extension: &str) -> Self {
        let trimmed = prefix.trim_matches('/');
        let prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}/")
        };

        Self {
            prefix,
            extension: extension.to_lowercase(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether a file name (or full entry name) carries the wanted extension.
    pub fn has_extension(&self, name: &str) -> bool {
        name.to_lowercase().ends_with(&self.extension)
    }

    /// The name relative to the prefix, if the entry is accepted.
    pub fn relative<'a>(&self, name: &'a str) -> Option<&'a str> {
        let relative = name.strip_prefix(self.prefix.as_str())?;
        if relative.is_empty() || !self.has_extension(relative) {
            return None;
        }
        Some(relative)
    }
}
