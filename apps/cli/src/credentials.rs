//! Stored session credentials.
//!
//! The terminal analog of the original web client's saved login: a small
//! JSON file under the user's config directory holding the token and
//! username from the last successful login. Restoration from it is
//! advisory; a stale token just means the next run starts logged out.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Credentials persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Session token from the last signup/login.
    pub token: String,
    /// Username the token was issued for.
    pub username: String,
}

/// Errors from reading or writing the credentials file.
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("Failed to access credentials file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode credentials: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoredCredentials {
    /// Default on-disk location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hacksnooze").join("credentials.json"))
    }

    /// Loads credentials from `path`, returning `None` if the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(creds) => Some(creds),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignoring malformed credentials file");
                None
            }
        }
    }

    /// Writes credentials to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), CredentialsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Deletes the credentials file at `path`, if present.
    pub fn clear(path: &Path) -> Result<(), CredentialsError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hacksnooze-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_save_load_clear_round_trip() {
        let path = temp_path("creds.json");
        let creds = StoredCredentials {
            token: "tok-1".to_string(),
            username: "crab".to_string(),
        };

        creds.save_to(&path).unwrap();
        let loaded = StoredCredentials::load_from(&path).unwrap();
        assert_eq!(loaded.token, "tok-1");
        assert_eq!(loaded.username, "crab");

        StoredCredentials::clear(&path).unwrap();
        assert!(StoredCredentials::load_from(&path).is_none());
    }

    #[test]
    fn test_clear_missing_file_is_ok() {
        let path = temp_path("never-written.json");
        assert!(StoredCredentials::clear(&path).is_ok());
    }

    #[test]
    fn test_malformed_file_loads_as_none() {
        let path = temp_path("garbage.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(StoredCredentials::load_from(&path).is_none());
        std::fs::remove_file(&path).unwrap();
    }
}
