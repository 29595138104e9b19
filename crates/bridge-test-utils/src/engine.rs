//! Fake MATLAB engine libraries.

use std::fs;
use std::path::{Path, PathBuf};

/// Write a fake engine library named `file_name` into `dir/extern/engines/java/jar`,
/// mirroring where MATLAB installs it. Returns the file path.
pub fn write_engine_jar(dir: &Path, file_name: &str) -> PathBuf {
    let jar_dir = dir.join("extern").join("engines").join("java").join("jar");
    fs::create_dir_all(&jar_dir).unwrap();

    let path = jar_dir.join(file_name);
    let bytes: Vec<u8> = b"PK\x03\x04"
        .iter()
        .copied()
        .chain((0..2048u32).map(|i| (i % 251) as u8))
        .collect();
    fs::write(&path, bytes).unwrap();
    path
}
