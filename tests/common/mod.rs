use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// A scratch file that lives as long as the returned directory.
pub fn temp_file(contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, contents).unwrap();
    (dir, path)
}
