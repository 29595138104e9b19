//! Resource discovery independent of bundle layout

use std::path::{Path, PathBuf};

use bridge_fs::BundleLayout;

use crate::source::{ArchiveSource, DirectorySource, EntryFilter, ResourceSource};
use crate::{EntryOutcome, Error, ResourceMap};

/// Resources found by one enumeration, plus one outcome per entry visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    pub map: ResourceMap,
    pub outcomes: Vec<EntryOutcome>,
}

impl CatalogReport {
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        self.outcomes.push(EntryOutcome::read(name.clone()));
        self.map.insert(name, content);
    }

    pub fn skip(&mut self, name: impl Into<String>, reason: impl Into<String>) {
        self.outcomes.push(EntryOutcome::skipped(name, reason));
    }

    pub fn skipped(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }
}

/// Lists bundled scripts by logical prefix and extension.
///
/// The bundle layout is fixed at construction; every enumeration reads the
/// bundle afresh. Enumeration never fails: an unreadable bundle produces an
/// empty map and an error log.
#[derive(Debug)]
pub struct ResourceCatalog {
    source: Box<dyn ResourceSource>,
}

impl ResourceCatalog {
    /// Build a catalog for an already-probed layout.
    pub fn new(layout: BundleLayout) -> Self {
        tracing::debug!(location = %layout.location().display(), "Opening resource bundle");
        match layout {
            BundleLayout::Archive(path) => Self::from_source(ArchiveSource::new(path)),
            BundleLayout::Directory(root) => Self::from_source(DirectorySource::new(root)),
        }
    }

    /// Probe `location` and build a catalog for whatever layout is found.
    ///
    /// A location that is neither a file nor a directory yields a catalog
    /// whose enumerations are always empty.
    pub fn open(location: impl AsRef<Path>) -> Self {
        match BundleLayout::detect(location.as_ref()) {
            Ok(layout) => Self::new(layout),
            Err(e) => {
                tracing::error!(error = %e, "Unable to locate bundled scripts");
                Self::from_source(MissingSource {
                    location: location.as_ref().to_path_buf(),
                })
            }
        }
    }

    pub fn from_source(source: impl ResourceSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Map of relative name to script text for every resource under
    /// `prefix` whose name ends with `extension` (case-insensitive).
    pub fn enumerate(&self, prefix: &str, extension: &str) -> ResourceMap {
        self.enumerate_with_report(prefix, extension).map
    }

    /// Like [`enumerate`](Self::enumerate), also returning the outcome of
    /// every entry considered.
    pub fn enumerate_with_report(&self, prefix: &str, extension: &str) -> CatalogReport {
        let filter = EntryFilter::new(prefix, extension);
        let mut report = CatalogReport::default();

        if let Err(e) = self.source.collect(&filter, &mut report) {
            tracing::error!(prefix, error = %e, "Error reading scripts");
            return CatalogReport {
                map: ResourceMap::new(),
                outcomes: vec![EntryOutcome::skipped(prefix, e.to_string())],
            };
        }

        tracing::debug!(prefix, count = report.map.len(), "Enumerated scripts");
        report
    }

    /// Read a single resource by its full logical name.
    pub fn script(&self, name: &str) -> Option<String> {
        match self.source.read(name) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::error!(script = name, error = %e, "Unable to read script");
                None
            }
        }
    }
}

/// Stand-in for a bundle that could not be located.
#[derive(Debug)]
struct MissingSource {
    location: PathBuf,
}

impl ResourceSource for MissingSource {
    fn collect(&self, _filter: &EntryFilter, _report: &mut CatalogReport) -> crate::Result<()> {
        Err(self.missing())
    }

    fn read(&self, _name: &str) -> crate::Result<String> {
        Err(self.missing())
    }
}

impl MissingSource {
    fn missing(&self) -> Error {
        bridge_fs::Error::BundleNotFound {
            path: self.location.clone(),
        }
        .into()
    }
}
