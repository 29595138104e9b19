//! Extension entry point

use std::cell::Cell;
use std::rc::Rc;

use bridge_fs::BridgePath;
use bridge_resources::{
    InstallOps, LinkInstallationResult, NativeOps, Provisioner, ResourceCatalog,
};

use crate::commands::{
    CommandOutcome, ExportScriptsCommand, SetEnginePathCommand, apply_engine_path,
};
use crate::host::{Dialogs, ExtensionHost};
use crate::menu::{MenuAction, MenuItem, sample_label};
use crate::preferences::EnginePathPreference;
use crate::{DOCUMENTATION_URL, MENU_PATH, Result, SAMPLES_MENU_PATH};

/// Helps integrate a host application with MATLAB.
///
/// Mostly concerned with providing scripts and moving them, and the MATLAB
/// engine, into the right places.
///
/// Changes to the engine path preference are installed the next time the
/// extension is handed the host, through [`install`](Self::install),
/// [`dispatch`](Self::dispatch) or
/// [`apply_engine_changes`](Self::apply_engine_changes).
#[derive(Debug)]
pub struct MatlabExtension<O = NativeOps> {
    catalog: ResourceCatalog,
    provisioner: Provisioner<O>,
    preference: EnginePathPreference,
    engine_changed: Rc<Cell<bool>>,
}

impl MatlabExtension {
    pub fn new(catalog: ResourceCatalog, preference: EnginePathPreference) -> Self {
        Self::with_provisioner(catalog, preference, Provisioner::new())
    }
}

impl<O: InstallOps> MatlabExtension<O> {
    pub fn with_provisioner(
        catalog: ResourceCatalog,
        mut preference: EnginePathPreference,
        provisioner: Provisioner<O>,
    ) -> Self {
        let engine_changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&engine_changed);
        preference.subscribe(move |_| flag.set(true));

        Self {
            catalog,
            provisioner,
            preference,
            engine_changed,
        }
    }

    pub fn name(&self) -> &'static str {
        "QuPath MATLAB extension"
    }

    pub fn description(&self) -> &'static str {
        "Helps facilitate integration between QuPath and MATLAB"
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    pub fn preference(&self) -> &EnginePathPreference {
        &self.preference
    }

    pub fn preference_mut(&mut self) -> &mut EnginePathPreference {
        &mut self.preference
    }

    /// Register the menus and apply any stored engine path.
    pub fn install(&mut self, host: &mut dyn ExtensionHost, dialogs: &mut dyn Dialogs) {
        host.add_menu_items(
            MENU_PATH,
            vec![MenuItem::action(
                "QuPath-MATLAB documentation (web)",
                MenuAction::OpenDocumentation,
            )],
        );
        host.add_menu_items(
            MENU_PATH,
            vec![MenuItem::action("Export MATLAB scripts", MenuAction::ExportScripts)],
        );
        host.add_menu_items(
            MENU_PATH,
            vec![
                MenuItem::action("Set path to MATLAB engine", MenuAction::SetEnginePath),
                MenuItem::Separator,
            ],
        );

        self.engine_changed.set(false);
        if let Some(result) = apply_engine_path(&self.preference, &self.provisioner, host, dialogs) {
            tracing::info!(%result, "Applied stored MATLAB engine path");
        }

        let samples = self.groovy_samples();
        if !samples.is_empty() {
            host.add_menu_items(SAMPLES_MENU_PATH, samples);
        }
    }

    /// Install the engine path if the preference changed since it was last
    /// applied.
    pub fn apply_engine_changes(
        &mut self,
        host: &mut dyn ExtensionHost,
        dialogs: &mut dyn Dialogs,
    ) -> Option<LinkInstallationResult> {
        if !self.engine_changed.replace(false) {
            return None;
        }
        let result = apply_engine_path(&self.preference, &self.provisioner, host, dialogs);
        if result.is_some() {
            host.refresh_extensions();
        }
        result
    }

    /// One menu item per bundled Groovy script.
    pub fn groovy_samples(&self) -> Vec<MenuItem> {
        self.catalog
            .enumerate(BridgePath::GroovyScripts.as_str(), ".groovy")
            .iter()
            .map(|(name, content)| {
                MenuItem::action(
                    sample_label(name),
                    MenuAction::ShowScript {
                        name: name.to_string(),
                        content: content.to_string(),
                    },
                )
            })
            .collect()
    }

    /// The Groovy helper script, for use from host scripts.
    pub fn helper_script(&self) -> Option<String> {
        self.catalog.script(BridgePath::HelperScript.as_str())
    }

    /// Run the action behind a menu item.
    pub fn dispatch(
        &mut self,
        action: &MenuAction,
        host: &mut dyn ExtensionHost,
        dialogs: &mut dyn Dialogs,
    ) -> Result<CommandOutcome> {
        if let Some(result) = self.apply_engine_changes(host, dialogs) {
            tracing::info!(%result, "Applied changed MATLAB engine path");
        }

        match action {
            MenuAction::OpenDocumentation => {
                host.open_url(DOCUMENTATION_URL);
                Ok(CommandOutcome::DocumentationOpened)
            }
            MenuAction::ExportScripts => Ok(self.export_scripts().run(dialogs)),
            MenuAction::SetEnginePath => self.set_engine_path().run(host, dialogs),
            MenuAction::ShowScript { name, content } => {
                host.show_script(name, content);
                Ok(CommandOutcome::ScriptShown)
            }
        }
    }

    pub fn export_scripts(&self) -> ExportScriptsCommand<'_, O> {
        ExportScriptsCommand::new(&self.catalog, &self.provisioner)
    }

    pub fn set_engine_path(&mut self) -> SetEnginePathCommand<'_, O> {
        SetEnginePathCommand::new(&mut self.preference, &self.provisioner)
            .with_pending(&self.engine_changed)
    }
}
