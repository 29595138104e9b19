//! Resources packed into a single zip archive

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use super::{EntryFilter, ResourceSource};
use crate::catalog::CatalogReport;
use crate::{Error, Result};

/// Reads resources from the entries of a zip archive.
#[derive(Debug, Clone)]
pub struct ArchiveSource {
    path: PathBuf,
}

impl ArchiveSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<ZipArchive<File>> {
        let file = File::open(&self.path).map_err(|e| bridge_fs::Error::io(&self.path, e))?;
        ZipArchive::new(file).map_err(|source| Error::Archive {
            path: self.path.clone(),
            source,
        })
    }
}

impl ResourceSource for ArchiveSource {
    fn collect(&self, filter: &EntryFilter, report: &mut CatalogReport) -> Result<()> {
        let mut archive = self.open()?;

        for index in 0..archive.len() {
            let mut entry = match archive.by_index(index) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Error reading archive entry");
                    report.skip(format!("#{index}"), e.to_string());
                    continue;
                }
            };

            if entry.is_dir() {
                continue;
            }

            let name = entry.name().to_string();
            let Some(relative) = filter.relative(&name) else {
                continue;
            };

            let mut content = String::new();
            match entry.read_to_string(&mut content) {
                Ok(_) => {
                    tracing::debug!(entry = %name, "Read script from archive");
                    report.insert(relative, content);
                }
                Err(e) => {
                    tracing::warn!(entry = %name, error = %e, "Error reading script from archive");
                    report.skip(relative, e.to_string());
                }
            }
        }

        Ok(())
    }

    fn read(&self, name: &str) -> Result<String> {
        let mut archive = self.open()?;
        let mut entry = archive.by_name(name).map_err(|_| Error::NotFound {
            name: name.to_string(),
        })?;

        let mut content = String::new();
        entry
            .read_to_string(&mut content)
            .map_err(|e| bridge_fs::Error::io(self.path.join(name), e))?;
        Ok(content)
    }
}
