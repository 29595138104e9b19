//! Test doubles for the host collaborators.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use bridge_extension::{Dialogs, EnginePathPreference, ExtensionHost, MatlabExtension, MenuItem};
use bridge_resources::ResourceCatalog;
use bridge_test_utils::TestBundle;
use tempfile::TempDir;

/// Records every call the extension makes on the host.
pub struct RecordingHost {
    pub extensions_dir: PathBuf,
    pub menus: Vec<(String, Vec<MenuItem>)>,
    pub jars: Vec<PathBuf>,
    pub refreshes: usize,
    pub shown: Vec<(String, String)>,
    pub urls: Vec<String>,
}

impl RecordingHost {
    pub fn new(extensions_dir: impl Into<PathBuf>) -> Self {
        Self {
            extensions_dir: extensions_dir.into(),
            menus: Vec::new(),
            jars: Vec::new(),
            refreshes: 0,
            shown: Vec::new(),
            urls: Vec::new(),
        }
    }

    /// Labels registered under `path`, separators as `---`.
    pub fn labels(&self, path: &str) -> Vec<String> {
        self.menus
            .iter()
            .filter(|(menu, _)| menu == path)
            .flat_map(|(_, items)| items.iter().map(ToString::to_string))
            .collect()
    }
}

impl ExtensionHost for RecordingHost {
    fn add_menu_items(&mut self, menu_path: &str, items: Vec<MenuItem>) {
        self.menus.push((menu_path.to_string(), items));
    }

    fn extensions_dir(&self) -> PathBuf {
        self.extensions_dir.clone()
    }

    fn add_extension_jar(&mut self, path: &Path) {
        self.jars.push(path.to_path_buf());
    }

    fn refresh_extensions(&mut self) {
        self.refreshes += 1;
    }

    fn show_script(&mut self, name: &str, content: &str) {
        self.shown.push((name.to_string(), content.to_string()));
    }

    fn open_url(&mut self, url: &str) {
        self.urls.push(url.to_string());
    }
}

/// Answers prompts from preset values and records what was asked.
#[derive(Default)]
pub struct ScriptedDialogs {
    pub directory: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub accept: bool,
    pub confirmations: Vec<String>,
    pub errors: Vec<String>,
}

impl Dialogs for ScriptedDialogs {
    fn prompt_for_directory(&mut self, _title: &str) -> Option<PathBuf> {
        self.directory.clone()
    }

    fn prompt_for_file(&mut self, _title: &str, extensions: &[&str]) -> Option<PathBuf> {
        assert_eq!(extensions, ["jar"]);
        self.file.clone()
    }

    fn confirm(&mut self, _title: &str, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.accept
    }

    fn show_error(&mut self, _title: &str, message: &str) {
        self.errors.push(message.to_string());
    }
}

pub fn sample_bundle() -> TestBundle {
    TestBundle::new()
        .with_file("matlab-qupath/setupQuPath.m", "addpath(genpath(pwd));")
        .with_file("matlab-qupath/qupath/getPixels.m", "function px = getPixels()\nend")
        .with_file("groovy/QuPathMATLAB.groovy", "class QuPathMATLAB {}")
        .with_file("groovy/Send_region_to_MATLAB.groovy", "println 'send'")
}

/// An extension reading `bundle` with preferences stored in `workspace`.
pub fn extension(bundle: &TestBundle, workspace: &TempDir) -> MatlabExtension {
    let catalog = ResourceCatalog::open(bundle.packed());
    let preference =
        EnginePathPreference::load(workspace.path().join("preferences.toml")).unwrap();
    MatlabExtension::new(catalog, preference)
}
