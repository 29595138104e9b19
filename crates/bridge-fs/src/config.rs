//! Preference file loading and saving

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};

/// Stores a preferences value in a single file.
///
/// The format is chosen from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: NormalizedPath,
}

impl PreferenceStore {
    pub fn new(path: impl Into<NormalizedPath>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// Load the stored value, or the type's default when the file is absent.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self) -> Result<T> {
        if !self.path.exists() {
            return Ok(T::default());
        }
        self.load()
    }

    /// Load the stored value.
    pub fn load<T: DeserializeOwned>(&self) -> Result<T> {
        let content = io::read_text(&self.path)?;

        match self.format()? {
            Format::Toml => toml::from_str(&content).map_err(|e| self.parse_error("TOML", e)),
            Format::Json => serde_json::from_str(&content).map_err(|e| self.parse_error("JSON", e)),
        }
    }

    /// Save the value atomically.
    pub fn save<T: Serialize>(&self, value: &T) -> Result<()> {
        let content = match self.format()? {
            Format::Toml => {
                toml::to_string_pretty(value).map_err(|e| self.serialize_error("TOML", e))?
            }
            Format::Json => {
                serde_json::to_string_pretty(value).map_err(|e| self.serialize_error("JSON", e))?
            }
        };

        io::write_atomic(&self.path, content.as_bytes())
    }

    fn format(&self) -> Result<Format> {
        let extension = self.path.extension().unwrap_or("");
        match extension.to_lowercase().as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    fn parse_error(&self, format: &str, e: impl std::fmt::Display) -> Error {
        Error::ConfigParse {
            path: self.path.to_native(),
            format: format.into(),
            message: e.to_string(),
        }
    }

    fn serialize_error(&self, format: &str, e: impl std::fmt::Display) -> Error {
        Error::ConfigSerialize {
            path: self.path.to_native(),
            format: format.into(),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Toml,
    Json,
}
