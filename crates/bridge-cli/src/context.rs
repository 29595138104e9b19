//! Resolution of the bundle, extensions directory and preferences file

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// File and directory locations a command works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub bundle: PathBuf,
    pub extensions_dir: PathBuf,
    pub prefs: PathBuf,
}

impl Context {
    /// Command-line values (or their environment variables) win; the rest
    /// fall back to per-user defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let bundle = match &cli.bundle {
            Some(bundle) => bundle.clone(),
            None => default_bundle_location().ok_or_else(|| {
                CliError::user(
                    "No resource bundle found next to the executable; pass --bundle or set MATLAB_BRIDGE_BUNDLE",
                )
            })?,
        };

        let extensions_dir = match &cli.extensions_dir {
            Some(dir) => dir.clone(),
            None => default_extensions_dir().ok_or_else(|| {
                CliError::user("Cannot determine the extensions directory; pass --extensions-dir")
            })?,
        };

        let prefs = match &cli.prefs {
            Some(path) => path.clone(),
            None => bridge_extension::default_preferences_path().ok_or_else(|| {
                CliError::user("Cannot determine the preferences location; pass --prefs")
            })?,
        };

        Ok(Self {
            bundle,
            extensions_dir,
            prefs,
        })
    }
}

/// `resources.zip` or `resources/` next to the executable.
pub fn default_bundle_location() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    bundle_beside(exe.parent()?)
}

fn bundle_beside(dir: &Path) -> Option<PathBuf> {
    ["resources.zip", "resources"]
        .into_iter()
        .map(|candidate| dir.join(candidate))
        .find(|path| path.exists())
}

/// `~/QuPath/extensions`, where QuPath looks for extensions by default.
pub fn default_extensions_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("QuPath").join("extensions"))
}
