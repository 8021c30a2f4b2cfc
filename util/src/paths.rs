use crate::config;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

static VERSIONED_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_v(\d+)\.json$").expect("valid version regex"));

/// Global data root (absolute), from `config::data_root()`.
/// If relative in env, resolve against current_dir().
pub fn data_root() -> PathBuf {
    let p = PathBuf::from(config::data_root());
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

// ─── Layout under a data root ──────────────────────────────

// {root}/exercises/week_{week}
pub fn week_dir(root: &Path, week: u32) -> PathBuf {
    root.join("exercises").join(format!("week_{week}"))
}

// {root}/exercises/week_{week}/week_{week}_key.json
pub fn unversioned_key_path(root: &Path, week: u32) -> PathBuf {
    week_dir(root, week).join(format!("week_{week}_key.json"))
}

// {root}/schemas/data_schema_{dataset}.json
pub fn schema_path(root: &Path, dataset: &str) -> PathBuf {
    root.join("schemas").join(format!("data_schema_{dataset}.json"))
}

// {root}/datasets/{dataset}.db
pub fn dataset_db_path(root: &Path, dataset: &str) -> PathBuf {
    root.join("datasets").join(format!("{dataset}.db"))
}

/// Version number of a `week_{w}_key_v{N}.json` file name, or 0 when unversioned.
pub fn key_version(file_name: &str) -> u64 {
    VERSIONED_KEY
        .captures(file_name)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0)
}

/// Finds the exercise key for `week`: the highest `week_{w}_key_v{N}.json`, else
/// `week_{w}_key.json`. Returns `Ok(None)` when neither exists.
pub fn latest_exercise_key(root: &Path, week: u32) -> io::Result<Option<PathBuf>> {
    let dir = week_dir(root, week);
    let prefix = format!("week_{week}_key_v");

    let mut best: Option<(u64, PathBuf)> = None;
    if dir.is_dir() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with(&prefix) || !name.ends_with(".json") {
                continue;
            }
            let version = key_version(&name);
            if best.as_ref().is_none_or(|(v, _)| version > *v) {
                best = Some((version, entry.path()));
            }
        }
    }

    if let Some((_, path)) = best {
        return Ok(Some(path));
    }

    let fallback = unversioned_key_path(root, week);
    Ok(fallback.is_file().then_some(fallback))
}
