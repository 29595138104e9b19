//! Filesystem primitives for MATLAB Bridge
//!
//! Provides normalized paths, atomic writes and copies, checksums,
//! resource-bundle layout detection and the preference file store.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use config::PreferenceStore;
pub use constants::BridgePath;
pub use error::{Error, Result};
pub use layout::BundleLayout;
pub use path::{NormalizedPath, relative_segments};
