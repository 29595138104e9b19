//! Resource-bundle layout detection
//!
//! Bundled scripts ship either packed into a single archive or as loose files
//! under a directory root. The shape is probed once and never re-checked.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Physical shape of a resource bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleLayout {
    /// All resources packed into one zip archive
    Archive(PathBuf),
    /// Resources present as loose files below a directory root
    Directory(PathBuf),
}

impl BundleLayout {
    /// Probe `location`: a regular file is a packed archive, a directory is
    /// an unpacked tree.
    pub fn detect(location: impl AsRef<Path>) -> Result<Self> {
        let location = location.as_ref();
        let root = dunce::canonicalize(location).unwrap_or_else(|_| location.to_path_buf());

        if root.is_file() {
            tracing::debug!(path = %root.display(), "Detected packed resource bundle");
            Ok(Self::Archive(root))
        } else if root.is_dir() {
            tracing::debug!(path = %root.display(), "Detected unpacked resource bundle");
            Ok(Self::Directory(root))
        } else {
            Err(Error::BundleNotFound {
                path: location.to_path_buf(),
            })
        }
    }

    /// The archive file or directory root backing this bundle.
    pub fn location(&self) -> &Path {
        match self {
            Self::Archive(path) | Self::Directory(path) => path,
        }
    }
}
