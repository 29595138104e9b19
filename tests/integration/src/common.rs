//! Shared fixtures for the end-to-end tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use bridge_extension::{Dialogs, ExtensionHost, MenuItem};
use bridge_test_utils::TestBundle;
use walkdir::WalkDir;

/// The `resources/` directory shipped with the workspace.
pub fn shipped_resources() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../resources")
}

/// A bundle holding a copy of every shipped resource.
pub fn shipped_bundle() -> TestBundle {
    let root = shipped_resources();
    WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .fold(TestBundle::new(), |bundle, entry| {
            let name = entry
                .path()
                .strip_prefix(&root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            bundle.with_file(&name, fs::read(entry.path()).unwrap())
        })
}

/// Host that keeps menus and installed libraries in memory.
#[derive(Default)]
pub struct MemoryHost {
    pub extensions_dir: PathBuf,
    pub menus: Vec<(String, Vec<MenuItem>)>,
    pub jars: Vec<PathBuf>,
    pub refreshes: usize,
}

impl MemoryHost {
    pub fn new(extensions_dir: impl Into<PathBuf>) -> Self {
        Self {
            extensions_dir: extensions_dir.into(),
            ..Self::default()
        }
    }

    pub fn items(&self, path: &str) -> Vec<&MenuItem> {
        self.menus
            .iter()
            .filter(|(menu, _)| menu == path)
            .flat_map(|(_, items)| items.iter())
            .collect()
    }
}

impl ExtensionHost for MemoryHost {
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

    fn show_script(&mut self, _name: &str, _content: &str) {}

    fn open_url(&mut self, _url: &str) {}
}

/// Dialogs that always answer the same way.
#[derive(Default)]
pub struct FixedDialogs {
    pub directory: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub accept: bool,
    pub errors: Vec<String>,
}

impl Dialogs for FixedDialogs {
    fn prompt_for_directory(&mut self, _title: &str) -> Option<PathBuf> {
        self.directory.clone()
    }

    fn prompt_for_file(&mut self, _title: &str, _extensions: &[&str]) -> Option<PathBuf> {
        self.file.clone()
    }

    fn confirm(&mut self, _title: &str, _message: &str) -> bool {
        self.accept
    }

    fn show_error(&mut self, _title: &str, message: &str) {
        self.errors.push(message.to_string());
    }
}
