//! Collaborators provided by the host application.

use std::path::{Path, PathBuf};

use crate::menu::MenuItem;

/// User prompts shown by the host.
pub trait Dialogs {
    /// Ask for a directory; `None` when the user cancels.
    fn prompt_for_directory(&mut self, title: &str) -> Option<PathBuf>;

    /// Ask for a file with one of `extensions`; `None` when the user cancels.
    fn prompt_for_file(&mut self, title: &str, extensions: &[&str]) -> Option<PathBuf>;

    /// Ask a yes/no question.
    fn confirm(&mut self, title: &str, message: &str) -> bool;

    /// Report an error the user has to act on.
    fn show_error(&mut self, title: &str, message: &str);
}

/// The application embedding the extension.
pub trait ExtensionHost {
    /// Append items to the menu at `menu_path` (`>`-separated), creating it
    /// if needed.
    fn add_menu_items(&mut self, menu_path: &str, items: Vec<MenuItem>);

    /// Directory scanned by the host for extra libraries.
    fn extensions_dir(&self) -> PathBuf;

    /// Make a library available to the host.
    fn add_extension_jar(&mut self, path: &Path);

    /// Rescan the extensions directory.
    fn refresh_extensions(&mut self);

    /// Open a script in the host's script editor.
    fn show_script(&mut self, name: &str, content: &str);

    fn open_url(&mut self, url: &str);
}
