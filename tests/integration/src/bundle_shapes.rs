//! End-to-end tests over the shipped resources, packed and unpacked.
//!
//! Exercises the complete flow: bundle probe -> enumeration -> export.

mod common;

use std::fs;

use bridge_extension::{CommandOutcome, EnginePathPreference, MatlabExtension};
use bridge_fs::BundleLayout;
use bridge_resources::{EntryStatus, ResourceCatalog};
use common::{FixedDialogs, shipped_bundle, shipped_resources};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use walkdir::WalkDir;

#[test]
fn test_probe_picks_layout_per_shape() {
    let bundle = shipped_bundle();

    assert!(matches!(
        BundleLayout::detect(bundle.packed()).unwrap(),
        BundleLayout::Archive(_)
    ));
    assert!(matches!(
        BundleLayout::detect(bundle.unpacked()).unwrap(),
        BundleLayout::Directory(_)
    ));
}

#[test]
fn test_shapes_enumerate_identically() {
    let bundle = shipped_bundle();
    let packed = ResourceCatalog::open(bundle.packed());
    let unpacked = ResourceCatalog::open(bundle.unpacked());

    for (prefix, extension) in [("matlab-qupath/", ".m"), ("groovy", ".groovy")] {
        let from_archive = packed.enumerate(prefix, extension);
        let from_directory = unpacked.enumerate(prefix, extension);

        let mut archive_entries: Vec<(&str, &str)> = from_archive.iter().collect();
        let mut directory_entries: Vec<(&str, &str)> = from_directory.iter().collect();
        archive_entries.sort();
        directory_entries.sort();

        assert!(!archive_entries.is_empty(), "no {extension} files under {prefix}");
        assert_eq!(archive_entries, directory_entries);
    }
}

#[test]
fn test_export_matches_shipped_scripts() {
    let bundle = shipped_bundle();
    let workspace = TempDir::new().unwrap();
    let destination = workspace.path().join("scripts");
    let preference = EnginePathPreference::load(workspace.path().join("prefs.toml")).unwrap();
    let extension = MatlabExtension::new(ResourceCatalog::open(bundle.packed()), preference);
    let mut dialogs = FixedDialogs {
        directory: Some(destination.clone()),
        ..FixedDialogs::default()
    };

    let CommandOutcome::Exported(outcomes) = extension.export_scripts().run(&mut dialogs) else {
        panic!("export was cancelled");
    };
    assert!(outcomes.iter().all(|o| matches!(o.status, EntryStatus::Written(_))));

    let shipped = shipped_resources().join("matlab-qupath");
    let expected: Vec<_> = WalkDir::new(&shipped)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "m"))
        .collect();
    assert_eq!(outcomes.len(), expected.len());

    for entry in expected {
        let relative = entry.path().strip_prefix(&shipped).unwrap();
        assert_eq!(
            fs::read_to_string(destination.join(relative)).unwrap(),
            fs::read_to_string(entry.path()).unwrap(),
        );
    }
}

#[test]
fn test_export_twice_is_idempotent() {
    let bundle = shipped_bundle();
    let workspace = TempDir::new().unwrap();
    let destination = workspace.path().join("scripts");
    let preference = EnginePathPreference::load(workspace.path().join("prefs.toml")).unwrap();
    let extension = MatlabExtension::new(ResourceCatalog::open(bundle.unpacked()), preference);

    let first = extension.export_scripts().export_to(&destination);
    let second = extension.export_scripts().export_to(&destination);

    assert_eq!(first, second);
}

#[test]
fn test_helper_script_available_from_both_shapes() {
    let bundle = shipped_bundle();
    let expected = fs::read_to_string(shipped_resources().join("groovy/QuPathMATLAB.groovy")).unwrap();

    for location in [bundle.packed(), bundle.unpacked()] {
        let preference =
            EnginePathPreference::load(bundle.root().join("prefs.toml")).unwrap();
        let extension = MatlabExtension::new(ResourceCatalog::open(location), preference);
        assert_eq!(extension.helper_script().as_deref(), Some(expected.as_str()));
    }
}
