//! Persistence for per-user state documents and the shared JSON helpers the
//! aggregator and roster reuse. One pretty-printed JSON file per username
//! under the users directory; a missing file reads as the default state, a
//! present-but-unreadable file is the caller's problem.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::models::UserState;

/// Read a JSON document if the file exists. Malformed content is an error;
/// absence is not.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Write a document as pretty-printed JSON, replacing any previous content.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub struct UserStore {
    dir: PathBuf,
}

impl UserStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        UserStore { dir: dir.into() }
    }

    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    pub fn path_for(&self, username: &str) -> PathBuf {
        self.dir.join(format!("{username}.json"))
    }

    /// Load a user's persisted state, falling back to the first-observation
    /// defaults when no document exists yet.
    pub fn load(&self, username: &str) -> Result<UserState> {
        Ok(read_json(&self.path_for(username))?.unwrap_or_default())
    }

    pub fn save(&self, username: &str, state: &UserState) -> Result<()> {
        write_json(&self.path_for(username), state)
    }

    /// Usernames with a persisted document, sorted by name so every walk
    /// over the collection is deterministic.
    pub fn usernames(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}
