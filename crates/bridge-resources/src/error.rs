//! Error types for bridge-resources

use std::path::PathBuf;

/// Result type for resource source operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading a resource bundle.
///
/// These never cross [`crate::ResourceCatalog`]; they become log lines and
/// skipped outcomes there.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] bridge_fs::Error),

    #[error("Failed to read archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Resource directory {prefix} not found under {root}")]
    PrefixNotFound { prefix: String, root: PathBuf },

    #[error("Resource {name} not found")]
    NotFound { name: String },
}
