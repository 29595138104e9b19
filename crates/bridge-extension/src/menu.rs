//! Menu entries registered with the host

use std::fmt;

/// What a menu item does when chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    OpenDocumentation,
    ExportScripts,
    SetEnginePath,
    /// Open a bundled Groovy script in the host's editor
    ShowScript { name: String, content: String },
}

/// An entry in a host menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Action { label: String, action: MenuAction },
    Separator,
}

impl MenuItem {
    pub fn action(label: impl Into<String>, action: MenuAction) -> Self {
        Self::Action {
            label: label.into(),
            action,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Action { label, .. } => Some(label),
            Self::Separator => None,
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action { label, .. } => f.write_str(label),
            Self::Separator => f.write_str("---"),
        }
    }
}

const GROOVY_SUFFIX: &str = ".groovy";

/// Menu label for a Groovy sample: underscores and slashes become spaces and
/// the `.groovy` suffix is dropped.
pub fn sample_label(name: &str) -> String {
    let spaced = name.replace(['_', '/'], " ");
    let label = spaced.trim();

    let cut = label.len().saturating_sub(GROOVY_SUFFIX.len());
    if label.len() >= GROOVY_SUFFIX.len()
        && label.is_char_boundary(cut)
        && label[cut..].eq_ignore_ascii_case(GROOVY_SUFFIX)
    {
        return label[..cut].to_string();
    }
    label.to_string()
}
