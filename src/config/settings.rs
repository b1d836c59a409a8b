//! User settings for teendash
//!
//! Manages user preferences: currency symbol, date formatting, and the first
//! day of the calendar week.

use serde::{Deserialize, Serialize};

use super::paths::DashPaths;
use crate::error::DashError;
use crate::store::file_io::{read_json, write_json_atomic};

/// User settings for teendash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// First day of week (0 = Sunday, 1 = Monday)
    ///
    /// The dashboard calendar lays weeks out Sunday-first.
    #[serde(default)]
    pub first_day_of_week: u8,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₪".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            first_day_of_week: 0,
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &DashPaths) -> Result<Self, DashError> {
        let path = paths.settings_file();

        if path.exists() {
            read_json(&path)
        } else {
            let settings = Self::default();
            paths.ensure_directories()?;
            write_json_atomic(&path, &settings)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashPaths) -> Result<(), DashError> {
        write_json_atomic(paths.settings_file(), self)
    }
}
