//! Writing bundled scripts out and installing the engine library reference

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use bridge_fs::checksum::compute_file_checksum;
use bridge_fs::{BridgePath, NormalizedPath, io, relative_segments};

use crate::ops::{InstallOps, NativeOps};
use crate::{EntryOutcome, ResourceMap};

/// Outcome of [`Provisioner::install_reference`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkInstallationResult {
    /// A symbolic link was created at the path
    Linked(PathBuf),
    /// Linking failed and the library was copied to the path
    Copied { path: PathBuf, checksum: String },
    /// Both linking and copying failed
    Failed(String),
}

impl LinkInstallationResult {
    /// The installed artifact, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Linked(path) | Self::Copied { path, .. } => Some(path),
            Self::Failed(_) => None,
        }
    }

    pub fn is_installed(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for LinkInstallationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linked(path) => write!(f, "linked {}", path.display()),
            Self::Copied { path, .. } => write!(f, "copied to {}", path.display()),
            Self::Failed(reason) => write!(f, "installation failed: {reason}"),
        }
    }
}

/// Materializes resource maps and installs the engine library reference.
#[derive(Debug, Clone, Default)]
pub struct Provisioner<O = NativeOps> {
    ops: O,
}

impl Provisioner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: InstallOps> Provisioner<O> {
    pub fn with_ops(ops: O) -> Self {
        Self { ops }
    }

    /// Write every entry of `map` to `destination_root/<relative name>`.
    ///
    /// Missing directories are created and existing files overwritten. A
    /// failed entry is logged and skipped; the rest are still written. There
    /// is no rollback of entries already written.
    pub fn materialize(&self, map: &ResourceMap, destination_root: &Path) -> Vec<EntryOutcome> {
        map.iter()
            .map(|(name, content)| {
                let segments = relative_segments(name);
                if segments.is_empty() {
                    tracing::warn!(script = name, "Script name has no usable path segments");
                    return EntryOutcome::skipped(name, "empty relative path");
                }

                let output = segments
                    .iter()
                    .fold(destination_root.to_path_buf(), |path, segment| path.join(segment));
                tracing::info!(path = %output.display(), "Writing script");

                match io::write_text(&NormalizedPath::new(&output), content) {
                    Ok(()) => EntryOutcome::written(name, output),
                    Err(e) => {
                        tracing::error!(path = %output.display(), error = %e, "Error writing file");
                        EntryOutcome::skipped(name, e.to_string())
                    }
                }
            })
            .collect()
    }

    /// Install a reference to `source_file` in `target_directory`.
    ///
    /// First tries a symbolic link named `matlab_engine` pointing at the
    /// directory containing `source_file`; if that fails, copies the file to
    /// `matlab_engine.jar`. Stale artifacts at either path are removed first,
    /// unless one of them is `source_file` itself. An engine that already
    /// lives directly in `target_directory` is left where it is and reported
    /// as `Copied`. The caller is expected to have confirmed an unusual file name already.
    pub fn install_reference(
        &self,
        source_file: &Path,
        target_directory: &Path,
    ) -> LinkInstallationResult {
        if !source_file.is_file() {
            return LinkInstallationResult::Failed(format!(
                "MATLAB engine not found at {}",
                source_file.display()
            ));
        }
        let source_file = dunce::canonicalize(source_file).unwrap_or_else(|_| source_file.to_path_buf());

        if let Err(e) = fs::create_dir_all(target_directory) {
            return LinkInstallationResult::Failed(format!(
                "cannot create {}: {e}",
                target_directory.display()
            ));
        }
        let resolved_target = match dunce::canonicalize(target_directory) {
            Ok(path) => path,
            Err(e) => {
                return LinkInstallationResult::Failed(format!(
                    "cannot resolve {}: {e}",
                    target_directory.display()
                ));
            }
        };

        let link_path = target_directory.join(BridgePath::EngineLink.as_str());
        let copy_path = target_directory.join(BridgePath::EngineCopy.as_str());

        for (stale, name) in [(&link_path, BridgePath::EngineLink), (&copy_path, BridgePath::EngineCopy)] {
            if resolved_target.join(name.as_str()) == source_file {
                continue;
            }
            match self.ops.remove(stale) {
                Ok(true) => tracing::debug!(path = %stale.display(), "Removed previous engine reference"),
                Ok(false) => {}
                Err(e) => tracing::warn!(path = %stale.display(), error = %e, "Unable to remove previous engine reference"),
            }
        }

        // A link to the extensions directory itself would point at its own parent
        if source_file.parent() == Some(resolved_target.as_path()) {
            return self.keep_in_place(&source_file);
        }

        match self.try_link(&source_file, &link_path) {
            Ok(()) => {
                tracing::info!(link = %link_path.display(), "Linked MATLAB engine");
                return LinkInstallationResult::Linked(link_path);
            }
            Err(e) => {
                tracing::debug!(link = %link_path.display(), error = %e, "Unable to create link, copying instead");
            }
        }

        self.copy(&source_file, &copy_path)
    }

    fn try_link(&self, source_file: &Path, link_path: &Path) -> std::io::Result<()> {
        let engine_dir = source_file.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "engine has no parent directory")
        })?;
        self.ops.link_dir(engine_dir, link_path)
    }

    fn copy(&self, source_file: &Path, copy_path: &Path) -> LinkInstallationResult {
        let destination = NormalizedPath::new(copy_path);

        if let Err(e) = self.ops.copy_file(source_file, &destination) {
            tracing::error!(path = %copy_path.display(), error = %e, "Unable to copy MATLAB engine");
            self.discard(copy_path);
            return LinkInstallationResult::Failed(e.to_string());
        }

        let verified = compute_file_checksum(source_file).and_then(|expected| {
            compute_file_checksum(copy_path).map(|actual| (expected, actual))
        });

        match verified {
            Ok((expected, actual)) if expected == actual => {
                tracing::info!(path = %copy_path.display(), checksum = %actual, "Copied MATLAB engine");
                LinkInstallationResult::Copied {
                    path: copy_path.to_path_buf(),
                    checksum: actual,
                }
            }
            Ok((expected, actual)) => {
                self.discard(copy_path);
                LinkInstallationResult::Failed(format!(
                    "copy of MATLAB engine is corrupt (expected {expected}, found {actual})"
                ))
            }
            Err(e) => {
                self.discard(copy_path);
                LinkInstallationResult::Failed(format!("cannot verify copied MATLAB engine: {e}"))
            }
        }
    }

    /// The engine already sits in the extensions directory; the host picks
    /// it up without a link or a second copy.
    fn keep_in_place(&self, source_file: &Path) -> LinkInstallationResult {
        match compute_file_checksum(source_file) {
            Ok(checksum) => {
                tracing::info!(path = %source_file.display(), "MATLAB engine already in extensions directory");
                LinkInstallationResult::Copied {
                    path: source_file.to_path_buf(),
                    checksum,
                }
            }
            Err(e) => LinkInstallationResult::Failed(format!(
                "cannot read MATLAB engine {}: {e}",
                source_file.display()
            )),
        }
    }

    fn discard(&self, path: &Path) {
        if let Err(e) = self.ops.remove(path) {
            tracing::warn!(path = %path.display(), error = %e, "Unable to remove incomplete copy");
        }
    }
}
