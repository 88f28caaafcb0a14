//! User configuration: where the data file lives.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::TrackerError;
use crate::storage::DEFAULT_FILE_NAME;

/// Environment override for the data-file path, mainly for tests and
/// scripting.
pub const DATA_FILE_ENV: &str = "CROP_LEDGER_FILE";

const APP_DIR: &str = "crop_ledger";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    fn default_in(base: &Path) -> Self {
        Self {
            data_file: base.join(DEFAULT_FILE_NAME),
        }
    }
}

/// Loads and saves the JSON config under the platform data directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, TrackerError> {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::from_base(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, TrackerError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, TrackerError> {
        fs::create_dir_all(&base)?;
        let path = base.join(CONFIG_FILE);
        Ok(Self { base, path })
    }

    /// Reads the config, falling back to defaults when the file is absent.
    pub fn load(&self) -> Result<Config, TrackerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default_in(&self.base))
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Resolves the data-file path: the environment override wins, then the
    /// configured path.
    pub fn resolve_data_file(&self, config: &Config) -> PathBuf {
        match std::env::var_os(DATA_FILE_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => config.data_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_falls_back_to_default_data_file() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.data_file, dir.path().join(DEFAULT_FILE_NAME));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = Config {
            data_file: dir.path().join("elsewhere.txt"),
        };
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.data_file, config.data_file);
    }
}
