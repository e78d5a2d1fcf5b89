//! Submission storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where finished submissions are kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON data file holding the record-set
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_file"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("messages.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_file_is_messages_json() {
        assert_eq!(StorageConfig::default().data_file, PathBuf::from("messages.json"));
    }

    #[test]
    fn empty_data_file_is_rejected() {
        let config = StorageConfig {
            data_file: PathBuf::new(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.data_file"))
        );
    }
}
