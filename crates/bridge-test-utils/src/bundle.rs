//! [`TestBundle`] builder for resource-bundle test scenarios.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// A set of named resources that can be laid out as a zip archive, as a
/// directory tree, or both, inside one temporary directory.
///
/// # Example
///
/// ```rust,no_run
/// use bridge_test_utils::TestBundle;
///
/// let bundle = TestBundle::new()
///     .with_file("matlab-qupath/qupath/readImage.m", "img = 1;")
///     .with_file("groovy/Sample_script.groovy", "println 'hi'");
/// let archive = bundle.packed();
/// let directory = bundle.unpacked();
/// ```
pub struct TestBundle {
    temp_dir: TempDir,
    files: Vec<(String, Vec<u8>)>,
}

impl Default for TestBundle {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBundle {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            files: Vec::new(),
        }
    }

    /// Add a resource under its full `/`-separated logical name.
    pub fn with_file(mut self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.files.push((name.to_string(), content.as_ref().to_vec()));
        self
    }

    /// Root of the temporary directory holding both layouts.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the resources as loose files below `<root>/unpacked`.
    pub fn unpacked(&self) -> PathBuf {
        let base = self.root().join("unpacked");
        fs::create_dir_all(&base).unwrap();
        for (name, content) in &self.files {
            let path = base.join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
        }
        base
    }

    /// Write the resources into `<root>/bundle.zip`, with explicit directory
    /// entries the way packaging tools emit them.
    pub fn packed(&self) -> PathBuf {
        let path = self.root().join("bundle.zip");
        let file = fs::File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        let mut directories: Vec<String> = Vec::new();
        for (name, content) in &self.files {
            let parts: Vec<&str> = name.split('/').collect();
            let mut prefix = String::new();
            for part in &parts[..parts.len() - 1] {
                prefix.push_str(part);
                prefix.push('/');
                if !directories.contains(&prefix) {
                    writer.add_directory(prefix.as_str(), options).unwrap();
                    directories.push(prefix.clone());
                }
            }
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(content).unwrap();
        }

        writer.finish().unwrap();
        path
    }
}
