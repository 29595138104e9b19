//! Bundled script discovery and provisioning.
//!
//! [`ResourceCatalog`] lists the scripts shipped with the extension, whether
//! they are packed into an archive or present as loose files.
//! [`Provisioner`] writes them out to a user-chosen directory and installs a
//! reference to the MATLAB engine library, preferring a symbolic link and
//! falling back to a byte copy.

pub mod catalog;
pub mod error;
pub mod map;
pub mod ops;
pub mod outcome;
pub mod provision;
pub mod source;

pub use catalog::{CatalogReport, ResourceCatalog};
pub use error::{Error, Result};
pub use map::ResourceMap;
pub use ops::{InstallOps, NativeOps};
pub use outcome::{EntryOutcome, EntryStatus};
pub use provision::{LinkInstallationResult, Provisioner};
pub use source::{ArchiveSource, DirectorySource, EntryFilter, ResourceSource};
