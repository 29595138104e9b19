//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::{self as stdio, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a failed write never leaves a partial
/// file at `path`. Missing parent directories are created.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();
    let temp_path = prepare_temp(&native_path)?;

    let result = write_locked(&temp_path, &native_path, content)
        .and_then(|()| fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Copy a file atomically, returning the number of bytes copied.
///
/// The destination is either absent or a complete copy of `source`.
pub fn copy_atomic(source: &Path, destination: &NormalizedPath) -> Result<u64> {
    let native_path = destination.to_native();
    let temp_path = prepare_temp(&native_path)?;

    let result = copy_to_temp(source, &temp_path).and_then(|bytes| {
        fs::rename(&temp_path, &native_path)
            .map(|()| bytes)
            .map_err(|e| Error::io(&native_path, e))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Remove whatever sits at `path`: a symlink (to a file or a directory), a
/// regular file or a directory tree.
///
/// Returns `false` when nothing was there. Symlinks are removed without
/// following them.
pub fn remove_artifact(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == stdio::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::io(path, e)),
    };

    let removed = if metadata.file_type().is_symlink() {
        remove_symlink(path)
    } else if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    removed.map(|()| true).map_err(|e| Error::io(path, e))
}

#[cfg(windows)]
fn remove_symlink(path: &Path) -> stdio::Result<()> {
    // Directory symlinks and junctions on Windows must go through remove_dir.
    fs::remove_file(path).or_else(|_| fs::remove_dir(path))
}

#[cfg(not(windows))]
fn remove_symlink(path: &Path) -> stdio::Result<()> {
    fs::remove_file(path)
}

fn prepare_temp(native_path: &Path) -> Result<PathBuf> {
    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file lives in the same directory so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    Ok(native_path.with_file_name(temp_name))
}

fn write_locked(temp_path: &Path, native_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = open_temp(temp_path)?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.to_path_buf(),
    })?;

    Ok(())
}

fn copy_to_temp(source: &Path, temp_path: &Path) -> Result<u64> {
    let mut reader = File::open(source).map_err(|e| Error::io(source, e))?;
    let mut temp_file = open_temp(temp_path)?;

    let bytes = stdio::copy(&mut reader, &mut temp_file).map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;
    Ok(bytes)
}

fn open_temp(temp_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))
}
