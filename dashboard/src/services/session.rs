//! # Session Persistence
//!
//! The only durable client-side state: the logged-in username, stored as a
//! small JSON file. No file means no session and the entry screen is shown.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Session persistence errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// File could not be read, written or removed
    #[error("Session file error: {0}")]
    Io(#[from] io::Error),
    /// File exists but does not hold a session
    #[error("Corrupt session file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct SessionFile {
    username: String,
}

/// Reads and writes the persisted username.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved username, or `None` when there is no session.
    ///
    /// A file holding a blank username counts as no session.
    pub fn load(&self) -> Result<Option<String>, SessionError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let session: SessionFile = serde_json::from_str(&contents)?;
        let username = shared::normalize_username(&session.username);
        Ok((!username.is_empty()).then_some(username))
    }

    pub fn save(&self, username: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&SessionFile {
            username: username.to_string(),
        })?;
        fs::write(&self.path, contents)?;
        tracing::debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    /// Remove the session. Missing file is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_no_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path().join("session.json"));
        assert_eq!(store.load().expect("load"), None);
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));

        store.save("alice").expect("save");
        assert_eq!(store.load().expect("load"), Some("alice".to_string()));

        store.clear().expect("clear");
        assert_eq!(store.load().expect("load"), None);
        store.clear().expect("second clear is a no-op");
    }

    #[test]
    fn test_blank_username_is_no_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"username": "  "}"#).expect("write");

        assert_eq!(SessionStore::new(path).load().expect("load"), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").expect("write");

        assert!(matches!(SessionStore::new(path).load(), Err(SessionError::Corrupt(_))));
    }
}
