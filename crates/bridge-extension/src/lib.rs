//! MATLAB integration for QuPath-style image-analysis hosts.
//!
//! This crate wires the resource catalog and provisioner into the commands a
//! host exposes: exporting the bundled MATLAB scripts, pointing the host at
//! the MATLAB engine library, and listing the Groovy samples. Dialogs, menus
//! and the extensions directory belong to the host and are reached through
//! the [`Dialogs`] and [`ExtensionHost`] traits.

pub mod commands;
pub mod error;
pub mod extension;
pub mod host;
pub mod menu;
pub mod preferences;

/// Menu under which every item of the extension is registered.
pub const MENU_PATH: &str = "Extensions>MATLAB";

/// Submenu holding the Groovy sample scripts.
pub const SAMPLES_MENU_PATH: &str = "Extensions>MATLAB>Groovy MATLAB samples";

/// Online documentation for the integration.
pub const DOCUMENTATION_URL: &str = "http://go.qub.ac.uk/qupath-matlab";

pub use commands::{CommandOutcome, ExportScriptsCommand, SetEnginePathCommand, apply_engine_path};
pub use error::{Error, Result};
pub use extension::MatlabExtension;
pub use host::{Dialogs, ExtensionHost};
pub use menu::{MenuAction, MenuItem, sample_label};
pub use preferences::{EnginePathPreference, Preferences, default_preferences_path};
