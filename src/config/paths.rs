//! Path management for Purse
//!
//! ## Path Resolution Order
//!
//! 1. `PURSE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`$XDG_CONFIG_HOME`, `~/.config`,
//!    `%APPDATA%`, ...) joined with `purse`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::PurseError;
use crate::models::UserId;

/// Manages all paths used by Purse
#[derive(Debug, Clone)]
pub struct PursePaths {
    /// Base directory for all Purse data
    base_dir: PathBuf,
}

impl PursePaths {
    /// Create a new PursePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PurseError> {
        let base_dir = if let Ok(custom) = std::env::var("PURSE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PursePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory holding one file per wallet (<base>/data/wallets/)
    pub fn wallets_dir(&self) -> PathBuf {
        self.data_dir().join("wallets")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to users.json (the user registry)
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Get the path of a user's wallet file
    pub fn wallet_file(&self, user_id: &UserId) -> PathBuf {
        self.wallets_dir()
            .join(format!("{}.json", user_id.as_uuid()))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), PurseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PurseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.wallets_dir())
            .map_err(|e| PurseError::Io(format!("Failed to create wallets directory: {}", e)))?;

        Ok(())
    }

    /// Check if Purse has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PurseError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| PurseError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("purse"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PursePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.wallets_dir(),
            temp_dir.path().join("data").join("wallets")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PursePaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.wallets_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PursePaths::with_base_dir(temp_dir.path().to_path_buf());
        let user = UserId::new();

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.users_file(),
            temp_dir.path().join("data").join("users.json")
        );
        assert_eq!(
            paths.wallet_file(&user),
            paths
                .wallets_dir()
                .join(format!("{}.json", user.as_uuid()))
        );
    }
}
