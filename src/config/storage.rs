//! Storage configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::error::ValidationError;

/// Storage configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Conference file opened when none is given on the command line
    pub default_file: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.default_file {
            Some(path) if path.as_os_str().is_empty() => Err(ValidationError::EmptyDefaultFile),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_default_file_is_valid() {
        assert!(StorageConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_default_file_is_rejected() {
        let config = StorageConfig {
            default_file: Some(PathBuf::new()),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyDefaultFile)
        ));
    }
}
