//! End-to-end tests for linking the MATLAB engine into a host.
//!
//! Exercises: install -> set engine -> restart with stored preference.

mod common;

use std::fs;
use std::io;
use std::path::Path;

use bridge_extension::{
    CommandOutcome, EnginePathPreference, MENU_PATH, MatlabExtension, SAMPLES_MENU_PATH,
};
use bridge_fs::NormalizedPath;
use bridge_fs::checksum::compute_file_checksum;
use bridge_resources::{InstallOps, LinkInstallationResult, NativeOps, Provisioner, ResourceCatalog};
use bridge_test_utils::write_engine_jar;
use common::{FixedDialogs, MemoryHost, shipped_bundle};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Filesystem without symbolic link support.
struct NoLinks;

impl InstallOps for NoLinks {
    fn link_dir(&self, _target: &Path, _link: &Path) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "no links"))
    }

    fn copy_file(&self, source: &Path, destination: &NormalizedPath) -> bridge_fs::Result<u64> {
        NativeOps.copy_file(source, destination)
    }
}

#[test]
fn test_install_registers_menus_from_shipped_bundle() {
    let bundle = shipped_bundle();
    let workspace = TempDir::new().unwrap();
    let preference = EnginePathPreference::load(workspace.path().join("prefs.toml")).unwrap();
    let mut extension = MatlabExtension::new(ResourceCatalog::open(bundle.packed()), preference);
    let mut host = MemoryHost::new(workspace.path().join("extensions"));
    let mut dialogs = FixedDialogs::default();

    extension.install(&mut host, &mut dialogs);

    assert_eq!(host.items(MENU_PATH).len(), 4);
    let samples: Vec<String> = host
        .items(SAMPLES_MENU_PATH)
        .iter()
        .map(|item| item.to_string())
        .collect();
    assert!(samples.contains(&"Send region to MATLAB".to_string()));
    assert!(samples.contains(&"QuPathMATLAB".to_string()));
    assert!(host.jars.is_empty());
}

#[test]
fn test_copy_fallback_survives_restart() {
    let bundle = shipped_bundle();
    let workspace = TempDir::new().unwrap();
    let matlab = TempDir::new().unwrap();
    let engine = write_engine_jar(matlab.path(), "engine.jar");
    let prefs = workspace.path().join("prefs.toml");
    let extensions = workspace.path().join("extensions");
    let copy = extensions.join("matlab_engine.jar");

    // First session: choose the engine
    {
        let mut extension = MatlabExtension::with_provisioner(
            ResourceCatalog::open(bundle.unpacked()),
            EnginePathPreference::load(prefs.as_path()).unwrap(),
            Provisioner::with_ops(NoLinks),
        );
        let mut host = MemoryHost::new(&extensions);
        let mut dialogs = FixedDialogs {
            file: Some(engine.clone()),
            ..FixedDialogs::default()
        };

        let outcome = extension
            .set_engine_path()
            .run(&mut host, &mut dialogs)
            .unwrap();

        let CommandOutcome::EngineSet(Some(LinkInstallationResult::Copied { path, checksum })) =
            outcome
        else {
            panic!("engine was not copied: {outcome:?}");
        };
        assert_eq!(path, copy);
        assert_eq!(checksum, compute_file_checksum(&engine).unwrap());
        assert_eq!(host.jars, vec![copy.clone()]);
        assert_eq!(host.refreshes, 1);
    }

    // Simulate the host clearing out its extensions directory
    fs::remove_file(&copy).unwrap();

    // Second session: the stored path is applied on install
    let mut extension = MatlabExtension::with_provisioner(
        ResourceCatalog::open(bundle.unpacked()),
        EnginePathPreference::load(prefs.as_path()).unwrap(),
        Provisioner::with_ops(NoLinks),
    );
    let mut host = MemoryHost::new(&extensions);
    let mut dialogs = FixedDialogs::default();

    extension.install(&mut host, &mut dialogs);

    assert_eq!(fs::read(&copy).unwrap(), fs::read(&engine).unwrap());
    assert_eq!(host.jars, vec![copy]);
    assert!(dialogs.errors.is_empty());
}

#[cfg(unix)]
#[test]
fn test_relinking_replaces_previous_copy() {
    let bundle = shipped_bundle();
    let workspace = TempDir::new().unwrap();
    let matlab = TempDir::new().unwrap();
    let engine = write_engine_jar(matlab.path(), "engine.jar");
    let extensions = workspace.path().join("extensions");
    fs::create_dir_all(&extensions).unwrap();
    fs::write(extensions.join("matlab_engine.jar"), b"old copy").unwrap();

    let mut extension = MatlabExtension::new(
        ResourceCatalog::open(bundle.packed()),
        EnginePathPreference::load(workspace.path().join("prefs.toml")).unwrap(),
    );
    let mut host = MemoryHost::new(&extensions);
    let mut dialogs = FixedDialogs::default();

    let outcome = extension
        .set_engine_path()
        .set_engine(&engine, &mut host, &mut dialogs)
        .unwrap();

    assert!(matches!(
        outcome,
        CommandOutcome::EngineSet(Some(LinkInstallationResult::Linked(_)))
    ));
    assert!(!extensions.join("matlab_engine.jar").exists());
    let target = fs::read_link(extensions.join("matlab_engine")).unwrap();
    assert_eq!(target, engine.parent().unwrap().canonicalize().unwrap());
}
