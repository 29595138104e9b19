//! Commands reachable from the extension's menu

use std::cell::Cell;
use std::path::Path;

use bridge_fs::BridgePath;
use bridge_resources::{EntryOutcome, InstallOps, LinkInstallationResult, Provisioner, ResourceCatalog};

use crate::host::{Dialogs, ExtensionHost};
use crate::preferences::EnginePathPreference;
use crate::{Error, Result};

const SET_ENGINE_TITLE: &str = "Set MATLAB engine";

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The user cancelled, or the selection was unusable
    Cancelled,
    /// Scripts were exported; one outcome per script
    Exported(Vec<EntryOutcome>),
    /// The engine path was stored and a reference installed (or not)
    EngineSet(Option<LinkInstallationResult>),
    ScriptShown,
    DocumentationOpened,
}

/// Writes the bundled MATLAB scripts to a directory chosen by the user.
pub struct ExportScriptsCommand<'a, O: InstallOps> {
    catalog: &'a ResourceCatalog,
    provisioner: &'a Provisioner<O>,
}

impl<'a, O: InstallOps> ExportScriptsCommand<'a, O> {
    pub fn new(catalog: &'a ResourceCatalog, provisioner: &'a Provisioner<O>) -> Self {
        Self {
            catalog,
            provisioner,
        }
    }

    pub fn run(&self, dialogs: &mut dyn Dialogs) -> CommandOutcome {
        match dialogs.prompt_for_directory("Export MATLAB scripts") {
            Some(directory) => CommandOutcome::Exported(self.export_to(&directory)),
            None => CommandOutcome::Cancelled,
        }
    }

    /// Write every bundled `.m` script below `directory`, keeping sub-paths.
    pub fn export_to(&self, directory: &Path) -> Vec<EntryOutcome> {
        let scripts = self
            .catalog
            .enumerate(BridgePath::MatlabScripts.as_str(), ".m");
        if scripts.is_empty() {
            tracing::warn!("No MATLAB scripts found to export");
        }
        self.provisioner.materialize(&scripts, directory)
    }
}

/// Stores the location of the MATLAB engine library and installs a
/// reference to it in the host's extensions directory.
pub struct SetEnginePathCommand<'a, O: InstallOps> {
    preference: &'a mut EnginePathPreference,
    provisioner: &'a Provisioner<O>,
    pending: Option<&'a Cell<bool>>,
}

impl<'a, O: InstallOps> SetEnginePathCommand<'a, O> {
    pub fn new(preference: &'a mut EnginePathPreference, provisioner: &'a Provisioner<O>) -> Self {
        Self {
            preference,
            provisioner,
            pending: None,
        }
    }

    /// Flag raised by a preference listener; cleared once this command has
    /// installed the new path itself.
    pub fn with_pending(mut self, pending: &'a Cell<bool>) -> Self {
        self.pending = Some(pending);
        self
    }

    pub fn run(
        &mut self,
        host: &mut dyn ExtensionHost,
        dialogs: &mut dyn Dialogs,
    ) -> Result<CommandOutcome> {
        let Some(engine) = dialogs.prompt_for_file("Select MATLAB engine", &["jar"]) else {
            tracing::warn!("No MATLAB engine selected");
            return Ok(CommandOutcome::Cancelled);
        };
        self.set_engine(&engine, host, dialogs)
    }

    /// Use `engine` as the MATLAB engine library.
    ///
    /// A file not named `engine.jar` is only accepted after the user
    /// confirms it.
    pub fn set_engine(
        &mut self,
        engine: &Path,
        host: &mut dyn ExtensionHost,
        dialogs: &mut dyn Dialogs,
    ) -> Result<CommandOutcome> {
        if !engine.is_file() {
            tracing::warn!(path = %engine.display(), "No MATLAB engine selected");
            return Ok(CommandOutcome::Cancelled);
        }

        let name = engine
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name != BridgePath::EngineJar.as_str() {
            let message = format!(
                "This looks like the wrong file!\nThe MATLAB engine should be called {}, but you selected {}\n\nTry to link anyway?",
                BridgePath::EngineJar,
                name
            );
            if !dialogs.confirm(SET_ENGINE_TITLE, &message) {
                return Ok(CommandOutcome::Cancelled);
            }
        }

        let absolute = dunce::canonicalize(engine).map_err(|source| Error::EnginePath {
            path: engine.to_path_buf(),
            source,
        })?;
        self.preference.set(absolute)?;
        if let Some(pending) = self.pending {
            pending.set(false);
        }

        let result = apply_engine_path(&*self.preference, self.provisioner, host, dialogs);
        host.refresh_extensions();
        Ok(CommandOutcome::EngineSet(result))
    }
}

/// Install a reference to the stored engine path, if it points at an
/// existing file, and hand it to the host.
///
/// A failed installation is reported through [`Dialogs::show_error`].
pub fn apply_engine_path<O: InstallOps>(
    preference: &EnginePathPreference,
    provisioner: &Provisioner<O>,
    host: &mut dyn ExtensionHost,
    dialogs: &mut dyn Dialogs,
) -> Option<LinkInstallationResult> {
    let engine = preference.get()?;
    if !engine.is_file() {
        tracing::debug!(path = %engine.display(), "Stored MATLAB engine no longer exists");
        return None;
    }

    let result = provisioner.install_reference(engine, &host.extensions_dir());
    match &result {
        LinkInstallationResult::Linked(path) | LinkInstallationResult::Copied { path, .. } => {
            host.add_extension_jar(path);
        }
        LinkInstallationResult::Failed(reason) => {
            dialogs.show_error(
                SET_ENGINE_TITLE,
                &format!("Unable to add the MATLAB engine to the extensions directory.\n\n{reason}"),
            );
        }
    }
    Some(result)
}
