//! Terminal implementations of the host collaborators

use std::path::{Path, PathBuf};

use bridge_extension::{Dialogs, ExtensionHost, MenuItem};
use colored::Colorize;
use dialoguer::{Confirm, Input};

/// Host that prints what a GUI would show.
#[derive(Debug)]
pub struct TerminalHost {
    extensions_dir: PathBuf,
    menus: Vec<(String, Vec<MenuItem>)>,
}

impl TerminalHost {
    pub fn new(extensions_dir: impl Into<PathBuf>) -> Self {
        Self {
            extensions_dir: extensions_dir.into(),
            menus: Vec::new(),
        }
    }

    /// Menus in registration order, items of repeated paths merged.
    pub fn menus(&self) -> Vec<(&str, Vec<&MenuItem>)> {
        let mut merged: Vec<(&str, Vec<&MenuItem>)> = Vec::new();
        for (path, items) in &self.menus {
            match merged.iter_mut().find(|(existing, _)| existing == path) {
                Some((_, existing)) => existing.extend(items.iter()),
                None => merged.push((path.as_str(), items.iter().collect())),
            }
        }
        merged
    }
}

impl ExtensionHost for TerminalHost {
    fn add_menu_items(&mut self, menu_path: &str, items: Vec<MenuItem>) {
        self.menus.push((menu_path.to_string(), items));
    }

    fn extensions_dir(&self) -> PathBuf {
        self.extensions_dir.clone()
    }

    fn add_extension_jar(&mut self, path: &Path) {
        println!("{} {}", "Extension library:".dimmed(), path.display());
    }

    fn refresh_extensions(&mut self) {
        tracing::debug!(dir = %self.extensions_dir.display(), "Extensions refreshed");
    }

    fn show_script(&mut self, _name: &str, content: &str) {
        print!("{content}");
        if !content.ends_with('\n') {
            println!();
        }
    }

    fn open_url(&mut self, url: &str) {
        println!("{} {}", "Documentation:".dimmed(), url.cyan());
    }
}

/// Prompts on the terminal via dialoguer.
///
/// A prompt that cannot be shown (no terminal attached) counts as a
/// cancellation.
#[derive(Debug, Default)]
pub struct TerminalDialogs {
    /// Answer every confirmation with yes
    pub assume_yes: bool,
}

impl TerminalDialogs {
    fn ask_path(&self, prompt: &str) -> Option<PathBuf> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(text) if !text.trim().is_empty() => Some(PathBuf::from(text.trim())),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Prompt unavailable");
                None
            }
        }
    }
}

impl Dialogs for TerminalDialogs {
    fn prompt_for_directory(&mut self, title: &str) -> Option<PathBuf> {
        self.ask_path(&format!("{title} - directory"))
    }

    fn prompt_for_file(&mut self, title: &str, extensions: &[&str]) -> Option<PathBuf> {
        let path = self.ask_path(&format!("{title} ({})", extensions.join(", ")))?;
        let accepted = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| extensions.iter().any(|wanted| ext == *wanted));
        if !accepted {
            tracing::warn!(path = %path.display(), "Selected file has an unexpected extension");
        }
        Some(path)
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        println!("{}", title.bold());
        println!("{message}");
        Confirm::new()
            .with_prompt("Continue?")
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Prompt unavailable");
                false
            })
    }

    fn show_error(&mut self, title: &str, message: &str) {
        eprintln!("{} {}", format!("{title}:").red().bold(), message);
    }
}
