//! Application configuration management.
//!
//! This module handles loading and saving the client configuration: the
//! backend base URL, where the session token is kept, the last email used to
//! log in, and an optional log directory.
//!
//! Configuration is stored at `~/.config/folio/config.json`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::auth::{FileTokenStore, KeyringTokenStore, TokenStore};

/// Application name used for config/data directory paths
const APP_NAME: &str = "folio";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the configured base URL
pub const API_URL_ENV: &str = "FOLIO_API_URL";

/// Where the session token is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenBackend {
    #[default]
    File,
    Keyring,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub token_backend: TokenBackend,
    #[serde(default)]
    pub last_email: Option<String>,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory holding the session file
    pub fn data_dir(&self) -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }

    /// The one base URL for this process: explicit override, then the
    /// `FOLIO_API_URL` environment variable, then the config file, then the
    /// built-in default.
    pub fn resolve_base_url(&self, explicit: Option<&str>) -> String {
        let env = std::env::var(API_URL_ENV).ok();
        Self::pick_base_url(explicit, env.as_deref(), self.api_base_url.as_deref())
    }

    fn pick_base_url(explicit: Option<&str>, env: Option<&str>, configured: Option<&str>) -> String {
        [explicit, env, configured]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Open the configured token store
    pub fn token_store(&self) -> Result<Arc<dyn TokenStore>> {
        Ok(match self.token_backend {
            TokenBackend::File => Arc::new(FileTokenStore::new(self.data_dir()?)),
            TokenBackend::Keyring => Arc::new(KeyringTokenStore::new()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_precedence() {
        assert_eq!(
            Config::pick_base_url(Some("http://cli/api"), Some("http://env/api"), Some("http://cfg/api")),
            "http://cli/api"
        );
        assert_eq!(
            Config::pick_base_url(None, Some("http://env/api/"), Some("http://cfg/api")),
            "http://env/api"
        );
        assert_eq!(
            Config::pick_base_url(None, Some("  "), Some("http://cfg/api")),
            "http://cfg/api"
        );
        assert_eq!(Config::pick_base_url(None, None, None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = serde_json::from_str(r#"{"token_backend": "keyring"}"#).unwrap();
        assert_eq!(config.token_backend, TokenBackend::Keyring);
        assert!(config.api_base_url.is_none());

        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.token_backend, TokenBackend::File);
    }
}
