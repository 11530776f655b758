#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub fn go_fixture_path(fixture_name: Option<&str>) -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("go");
    match fixture_name {
        Some(name) => root.join(name),
        None => root,
    }
}

pub fn read_fixture(name: &str) -> String {
    let path = go_fixture_path(Some(name));
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read: {}", path.display()))
}

/// Copies a fixture package into `dest` so it can be rewritten in place.
pub fn copy_package(name: &str, dest: &Path) -> PathBuf {
    let target = dest.join(name);
    fs::create_dir_all(&target).unwrap();
    for entry in fs::read_dir(go_fixture_path(Some(name))).unwrap() {
        let entry = entry.unwrap();
        if entry.file_type().unwrap().is_file() {
            fs::copy(entry.path(), target.join(entry.file_name())).unwrap();
        }
    }
    target
}
