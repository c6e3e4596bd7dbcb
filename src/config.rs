//! Connection settings for a Dataverse installation.
//!
//! Settings come from a TOML file or from the environment:
//!
//! ```toml
//! base_url = "https://demo.dataverse.org"
//! api_token = "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const URL_VAR: &str = "DATAVERSE_URL";
pub const TOKEN_VAR: &str = "DATAVERSE_API_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("no base URL configured. Set DATAVERSE_URL or pass --config <file>")]
    MissingBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
}

impl Config {
    /// Reads a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Config::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Reads `DATAVERSE_URL` and `DATAVERSE_API_TOKEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_vars(std::env::var(URL_VAR).ok(), std::env::var(TOKEN_VAR).ok())
    }

    /// The file if one is given, the environment otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Config::from_file(path),
            None => Config::from_env(),
        }
    }

    fn from_vars(base_url: Option<String>, api_token: Option<String>) -> Result<Self, ConfigError> {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        Ok(Config { base_url, api_token }.normalized())
    }

    // Empty tokens mean anonymous access.
    fn normalized(mut self) -> Self {
        self.api_token = self.api_token.filter(|token| !token.trim().is_empty());
        self
    }
}
