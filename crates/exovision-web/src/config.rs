//! Configuration loading for ExoVision.
//! Reads exovision.toml from the current directory or the path in the
//! EXOVISION_CONFIG env var; a missing default file falls back to defaults
//! so the dashboard comes up without ceremony.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

fn default_bind() -> String { "127.0.0.1:3005".to_string() }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Mock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the classification backend, including the `/api` prefix.
    pub base_url: String,
    pub data_source: DataSource,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            data_source: DataSource::Live,
        }
    }
}

fn default_base_url() -> String { "http://127.0.0.1:8000/api".to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub page_size: usize,
    pub recent_predictions: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            recent_predictions: default_recent(),
        }
    }
}

fn default_page_size() -> usize { 10 }
fn default_recent()    -> usize { 5 }

impl Config {
    /// Load configuration. An explicitly configured path must exist; the
    /// implicit `exovision.toml` may be absent.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("EXOVISION_CONFIG") {
            Ok(path) => {
                if !Path::new(&path).exists() {
                    anyhow::bail!(
                        "Config file not found: {}\n\
                         Copy exovision.example.toml to that path and edit it.",
                        path
                    );
                }
                Self::from_file(&path)
            }
            Err(_) => {
                let path = "exovision.toml";
                if Path::new(path).exists() {
                    Self::from_file(path)
                } else {
                    warn!("no exovision.toml found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:3005");
        assert_eq!(config.backend.data_source, DataSource::Live);
        assert_eq!(config.display.page_size, 10);
        assert_eq!(config.display.recent_predictions, 5);
    }

    #[test]
    fn test_partial_override() {
        let config: Config = toml::from_str(
            r#"
            [backend]
            base_url = "http://backend:9000/api"
            data_source = "mock"

            [display]
            page_size = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "http://backend:9000/api");
        assert_eq!(config.backend.data_source, DataSource::Mock);
        assert_eq!(config.display.page_size, 25);
        // Untouched sections keep their defaults.
        assert_eq!(config.server.bind, "127.0.0.1:3005");
    }
}
