use crate::database::{Capacity, DEFAULT_MAXIMUM_PETS};
use crate::error::{PetDbError, Result};
use crate::store::fs::DEFAULT_FILE_NAME;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for petdb, stored in `config.json` in the user config directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PetDbConfig {
    /// Data file used when `--file` is not given
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Maximum number of pets; `null` removes the limit
    #[serde(default = "default_max_pets")]
    pub max_pets: Option<usize>,
}

fn default_data_file() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_max_pets() -> Option<usize> {
    Some(DEFAULT_MAXIMUM_PETS)
}

impl Default for PetDbConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            max_pets: default_max_pets(),
        }
    }
}

impl PetDbConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PetDbError::Io)?;
        let config: PetDbConfig =
            serde_json::from_str(&content).map_err(PetDbError::Serialization)?;
        Ok(config)
    }

    pub fn capacity(&self) -> Capacity {
        Capacity::from(self.max_pets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PetDbConfig::default();
        assert_eq!(config.data_file, "pet_database.txt");
        assert_eq!(config.capacity(), Capacity::Limited(5));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = PetDbConfig::load(dir.path()).unwrap();
        assert_eq!(config, PetDbConfig::default());
    }

    #[test]
    fn test_load_written_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"data_file": "shelter.txt", "max_pets": 12}"#,
        )
        .unwrap();

        let loaded = PetDbConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "shelter.txt");
        assert_eq!(loaded.capacity(), Capacity::Limited(12));
    }

    #[test]
    fn test_null_max_pets_is_unlimited() {
        let config: PetDbConfig = serde_json::from_str(r#"{"max_pets": null}"#).unwrap();
        assert_eq!(config.capacity(), Capacity::Unlimited);
        assert_eq!(config.data_file, "pet_database.txt");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: PetDbConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PetDbConfig::default());
    }

    #[test]
    fn test_invalid_json_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            PetDbConfig::load(dir.path()),
            Err(PetDbError::Serialization(_))
        ));
    }
}
