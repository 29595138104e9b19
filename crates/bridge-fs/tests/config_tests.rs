use bridge_fs::{Error, NormalizedPath, PreferenceStore};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Prefs {
    engine: Option<String>,
}

#[test]
fn load_or_default_without_file() {
    let temp = TempDir::new().unwrap();
    let store = PreferenceStore::new(NormalizedPath::new(temp.path().join("prefs.toml")));

    let prefs: Prefs = store.load_or_default().unwrap();

    assert_eq!(prefs, Prefs::default());
}

#[test]
fn save_then_load_toml() {
    let temp = TempDir::new().unwrap();
    let store = PreferenceStore::new(NormalizedPath::new(temp.path().join("prefs.toml")));
    let prefs = Prefs {
        engine: Some("/opt/matlab/extern/engines/java/jar/engine.jar".into()),
    };

    store.save(&prefs).unwrap();
    let loaded: Prefs = store.load().unwrap();

    assert_eq!(loaded, prefs);
}

#[test]
fn save_json_by_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("prefs.json");
    let store = PreferenceStore::new(NormalizedPath::new(&path));

    store.save(&Prefs { engine: Some("e".into()) }).unwrap();

    let raw = std::fs::read_to_string(path).unwrap();
    assert!(raw.contains("\"engine\""));
}

#[test]
fn unsupported_extension_is_rejected() {
    let temp = TempDir::new().unwrap();
    let store = PreferenceStore::new(NormalizedPath::new(temp.path().join("prefs.ini")));

    let result = store.save(&Prefs::default());

    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn corrupt_file_reports_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("prefs.toml");
    std::fs::write(&path, "engine = [unterminated").unwrap();
    let store = PreferenceStore::new(NormalizedPath::new(&path));

    let result: bridge_fs::Result<Prefs> = store.load();

    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}
