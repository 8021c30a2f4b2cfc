use crate::paths;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a unique temporary directory and sets `DATA_ROOT`
/// to its absolute path for the duration of the test. The directory is
/// automatically cleaned up when the returned `TempDir` is dropped.
///
/// Keep the returned `TempDir` in scope for as long as you need the files.
pub fn setup_test_data_root() -> TempDir {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let abs = tmp
        .path()
        .canonicalize()
        .unwrap_or_else(|_| tmp.path().to_path_buf());
    unsafe {
        env::set_var("DATA_ROOT", &abs);
    }
    tmp
}

/// Writes an exercise key for `week`, versioned when `version` is set.
pub fn write_exercise_key(
    root: &Path,
    week: u32,
    version: Option<u32>,
    key: &serde_json::Value,
) -> PathBuf {
    let path = match version {
        Some(v) => paths::week_dir(root, week).join(format!("week_{week}_key_v{v}.json")),
        None => paths::unversioned_key_path(root, week),
    };
    write_json(&path, key);
    path
}

/// Writes `schemas/data_schema_{dataset}.json`.
pub fn write_schema(root: &Path, dataset: &str, schema: &serde_json::Value) -> PathBuf {
    let path = paths::schema_path(root, dataset);
    write_json(&path, schema);
    path
}

fn write_json(path: &Path, value: &serde_json::Value) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create fixture directory");
    }
    let body = serde_json::to_string_pretty(value).expect("fixture serializes");
    fs::write(path, body).expect("failed to write fixture");
}
