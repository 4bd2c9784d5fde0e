//! JSON persistence for the two state records.
//!
//! `chambers.json` and `events.json` live side by side in the data
//! directory. Saves go through a temp file and rename so a crash never
//! leaves a half-written record behind.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ChamberCalError, ChamberCalResult};

pub const CHAMBERS_FILE: &str = "chambers.json";
pub const EVENTS_FILE: &str = "events.json";

/// Platform data directory for chambercal state.
pub fn default_data_dir() -> ChamberCalResult<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| ChamberCalError::Storage("Could not determine data directory".into()))?
        .join("chambercal");

    Ok(dir)
}

/// Load a record if its file exists. A missing file is `Ok(None)`; an
/// unreadable or malformed file is an error the caller treats as "seed
/// from defaults".
pub fn load_json<T: DeserializeOwned>(dir: &Path, file: &str) -> ChamberCalResult<Option<T>> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let value = serde_json::from_str(&content)?;
    Ok(Some(value))
}

/// Save a record atomically (temp file + rename).
pub fn save_json<T: Serialize>(dir: &Path, file: &str, value: &T) -> ChamberCalResult<()> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(file);
    let temp = dir.join(format!("{file}.tmp"));

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(&temp, content)?;
    std::fs::rename(&temp, &path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<Vec<String>> = load_json(dir.path(), "nope.json").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let value = vec!["a".to_string(), "b".to_string()];

        save_json(dir.path(), "list.json", &value).unwrap();
        let loaded: Option<Vec<String>> = load_json(dir.path(), "list.json").unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();

        let loaded: ChamberCalResult<Option<Vec<String>>> = load_json(dir.path(), "bad.json");
        assert!(loaded.is_err());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        save_json(dir.path(), "x.json", &42u32).unwrap();
        assert!(!dir.path().join("x.json.tmp").exists());
    }
}
