use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

pub(crate) fn create_dir_all(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

pub(crate) fn canonicalize(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    std::fs::canonicalize(path).map_err(|e| Error::io(path, e))
}

pub(crate) fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, contents).map_err(|e| Error::io(path, e))
}

pub(crate) fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

#[test]
fn create_dir_nested_test() {
    let tempdir = tempfile::TempDir::new().unwrap();
    let nested = tempdir.path().join("a").join("b");
    create_dir_all(&nested).unwrap();
    assert!(nested.is_dir());
    create_dir_all(&nested).unwrap();
}

#[test]
fn read_missing_file_test() {
    let tempdir = tempfile::TempDir::new().unwrap();
    let err = read_to_string(tempdir.path().join("nope.txt")).unwrap_err();
    assert!(err.is_io());
}
