use std::fs;
use std::path::Path;

use crate::{ConfigError, EnvironmentConfig};

impl EnvironmentConfig {
    /// Deserializes a record from TOML using the same keys the front-end
    /// environment files use (`production`, `apiUrl`, `websocketUrl`).
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and deserializes a record from a TOML file on disk.
    pub fn from_file<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        tracing::info!(?path, "Loading environment config file");

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents).map_err(|error| {
            tracing::error!(?error, ?path, "Unable to parse environment config file");
            error
        })
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
