//! Filesystem primitives used when installing the engine library

use std::io;
use std::path::Path;

use bridge_fs::NormalizedPath;

/// The fallible operations behind [`crate::Provisioner::install_reference`].
///
/// [`NativeOps`] performs them on the real filesystem; tests substitute
/// implementations whose link or copy step fails.
pub trait InstallOps {
    /// Create a symbolic link at `link` pointing at the directory `target`.
    fn link_dir(&self, target: &Path, link: &Path) -> io::Result<()>;

    /// Copy `source` to `destination`, returning the bytes copied.
    fn copy_file(&self, source: &Path, destination: &NormalizedPath) -> bridge_fs::Result<u64>;

    /// Remove any file, directory or link at `path`.
    fn remove(&self, path: &Path) -> bridge_fs::Result<bool> {
        bridge_fs::io::remove_artifact(path)
    }
}

/// Real filesystem operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeOps;

impl InstallOps for NativeOps {
    #[cfg(unix)]
    fn link_dir(&self, target: &Path, link: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    fn link_dir(&self, target: &Path, link: &Path) -> io::Result<()> {
        std::os::windows::fs::symlink_dir(target, link)
    }

    #[cfg(not(any(unix, windows)))]
    fn link_dir(&self, _target: &Path, _link: &Path) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "symbolic links are not supported on this platform",
        ))
    }

    fn copy_file(&self, source: &Path, destination: &NormalizedPath) -> bridge_fs::Result<u64> {
        bridge_fs::io::copy_atomic(source, destination)
    }
}
