//! Path management for teendash
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `TEENDASH_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/teendash` or `~/.config/teendash`
//! 3. Windows: `%APPDATA%\teendash`

use std::path::PathBuf;

use crate::error::DashError;

/// Manages all paths used by teendash
#[derive(Debug, Clone)]
pub struct DashPaths {
    /// Base directory for all teendash data
    base_dir: PathBuf,
}

impl DashPaths {
    /// Create a new DashPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DashError> {
        let base_dir = if let Ok(custom) = std::env::var("TEENDASH_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/teendash/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/teendash/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the dashboard snapshot file
    pub fn dashboard_file(&self) -> PathBuf {
        self.data_dir().join("dashboard.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), DashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DashError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DashError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if teendash has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DashError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| DashError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("teendash"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DashError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DashError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("teendash"))
}
