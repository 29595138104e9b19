//! Resources present as loose files under a directory root

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{EntryFilter, ResourceSource};
use crate::catalog::CatalogReport;
use crate::{Error, Result};

/// Reads resources from files below `root/<prefix>`.
///
/// Subdirectories are walked in file-name order so enumeration is stable
/// across platforms.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceSource for DirectorySource {
    fn collect(&self, filter: &EntryFilter, report: &mut CatalogReport) -> Result<()> {
        let base = self.root.join(filter.prefix().trim_end_matches('/'));
        if !base.is_dir() {
            return Err(Error::PrefixNotFound {
                prefix: filter.prefix().to_string(),
                root: self.root.clone(),
            });
        }

        for entry in WalkDir::new(&base).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let name = e
                        .path()
                        .map(|p| relative_name(&base, p))
                        .unwrap_or_default();
                    tracing::warn!(entry = %name, error = %e, "Error walking script directory");
                    report.skip(name, e.to_string());
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if !filter.has_extension(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let name = relative_name(&base, entry.path());
            match fs::read_to_string(entry.path()) {
                Ok(content) => {
                    tracing::debug!(script = %name, "Read script");
                    report.insert(name, content);
                }
                Err(e) => {
                    tracing::warn!(script = %name, error = %e, "Error reading script");
                    report.skip(name, e.to_string());
                }
            }
        }

        Ok(())
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(Error::NotFound {
                name: name.to_string(),
            });
        }
        fs::read_to_string(&path).map_err(|e| bridge_fs::Error::io(path, e).into())
    }
}

/// `/`-joined path of `path` below `base`.
fn relative_name(base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
