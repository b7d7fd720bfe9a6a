//! Application configuration.

use crate::model::TimeRange;
use crate::provider::Dataset;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Directory under the user's home holding the config file.
const CONFIG_DIR: &str = ".edu-analytics";
const CONFIG_FILE: &str = "config.json";

/// Simulated behaviour of the sample data provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderConfig {
    pub summary_delay_ms: u64,
    pub regions_delay_ms: u64,
    pub subjects_delay_ms: u64,
    /// Dataset the provider reports as failed, if any.
    pub fail_dataset: Option<Dataset>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            summary_delay_ms: 1000,
            regions_delay_ms: 800,
            subjects_delay_ms: 600,
            fail_dataset: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Range selected when the dashboard opens.
    pub default_range: TimeRange,
    pub with_background_color: bool,
    pub provider: ProviderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_range: TimeRange::default(),
            with_background_color: true,
            provider: ProviderConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Default config location: `~/.edu-analytics/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Failed to get home directory",
    ))?;
    Ok(home_path.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.default_range = TimeRange::Last30Days;
        config.provider.fail_dataset = Some(Dataset::Subjects);
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // A partial file fills the remaining fields from the defaults.
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"default_range": "24h", "provider": {"regions_delay_ms": 5}}"#)
            .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.default_range, TimeRange::Last24Hours);
        assert!(config.with_background_color);
        assert_eq!(config.provider.regions_delay_ms, 5);
        assert_eq!(config.provider.summary_delay_ms, 1000);
        assert_eq!(config.provider.fail_dataset, None);
    }

    #[test]
    // A missing file is not an error.
    fn test_missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        assert!(Config::load_from_file(&path).is_err());
        assert!(Config::load_or_default(&path).is_err());
    }
}
