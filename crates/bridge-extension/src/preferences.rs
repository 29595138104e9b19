//! Persisted MATLAB engine path with change notification

use std::fmt;
use std::path::{Path, PathBuf};

use bridge_fs::{NormalizedPath, PreferenceStore};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Everything persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matlab_engine_path: Option<PathBuf>,
}

/// `<config dir>/matlab-bridge/preferences.toml`, if the platform has a
/// config directory.
pub fn default_preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("matlab-bridge").join("preferences.toml"))
}

type Listener = Box<dyn FnMut(Option<&Path>)>;

/// The stored location of the MATLAB engine library.
///
/// Every change is written to the preferences file before listeners are
/// notified. Setting the current value again is not a change.
pub struct EnginePathPreference {
    store: PreferenceStore,
    value: Option<PathBuf>,
    listeners: Vec<Listener>,
}

impl EnginePathPreference {
    /// Load the stored value; a missing file means no engine is set.
    pub fn load(path: impl Into<NormalizedPath>) -> Result<Self> {
        let store = PreferenceStore::new(path);
        let preferences: Preferences = store.load_or_default()?;
        Ok(Self {
            store,
            value: preferences.matlab_engine_path,
            listeners: Vec::new(),
        })
    }

    pub fn get(&self) -> Option<&Path> {
        self.value.as_deref()
    }

    /// Store a new engine path. Returns whether the value changed.
    pub fn set(&mut self, path: impl Into<PathBuf>) -> Result<bool> {
        self.update(Some(path.into()))
    }

    /// Forget the engine path. Returns whether the value changed.
    pub fn clear(&mut self) -> Result<bool> {
        self.update(None)
    }

    /// Call `listener` with the new value after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(Option<&Path>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn update(&mut self, value: Option<PathBuf>) -> Result<bool> {
        if self.value == value {
            return Ok(false);
        }

        self.store.save(&Preferences {
            matlab_engine_path: value.clone(),
        })?;
        self.value = value;
        tracing::debug!(path = ?self.value, "MATLAB engine path changed");

        for listener in &mut self.listeners {
            listener(self.value.as_deref());
        }
        Ok(true)
    }
}

impl fmt::Debug for EnginePathPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnginePathPreference")
            .field("store", &self.store)
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_fire_once_per_change() {
        let temp = tempfile::tempdir().unwrap();
        let mut preference = EnginePathPreference::load(temp.path().join("prefs.toml")).unwrap();
        let seen: Rc<RefCell<Vec<Option<PathBuf>>>> = Rc::default();
        let sink = Rc::clone(&seen);
        preference.subscribe(move |path| sink.borrow_mut().push(path.map(Path::to_path_buf)));

        assert!(preference.set("/opt/matlab/engine.jar").unwrap());
        assert!(!preference.set("/opt/matlab/engine.jar").unwrap());
        assert!(preference.clear().unwrap());

        assert_eq!(
            *seen.borrow(),
            vec![Some(PathBuf::from("/opt/matlab/engine.jar")), None]
        );
    }

    #[test]
    fn value_survives_reload() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("prefs.toml");

        EnginePathPreference::load(file.as_path())
            .unwrap()
            .set("/opt/matlab/engine.jar")
            .unwrap();
        let reloaded = EnginePathPreference::load(file.as_path()).unwrap();

        assert_eq!(reloaded.get(), Some(Path::new("/opt/matlab/engine.jar")));
    }

    #[test]
    fn cleared_value_is_omitted_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("prefs.toml");
        let mut preference = EnginePathPreference::load(file.as_path()).unwrap();
        preference.set("/opt/matlab/engine.jar").unwrap();

        preference.clear().unwrap();

        let parsed: Preferences = toml::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(parsed, Preferences::default());
    }
}
