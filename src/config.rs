use crate::constants::{
    CONFIG_PATH_ENV, CONFLUENCE_TOKEN_ENV, DEFAULT_CONFIG_PATH, DEFAULT_DIRECTORY_PAGE_ID,
    DEFAULT_SERVER_PORT, DEFAULT_SLACK_BASE_URL, SLACK_TOKEN_ENV,
};
use crate::error::{Result, RosterError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub confluence: ConfluenceConfig,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfluenceConfig {
    pub base_url: String,
    #[serde(default = "default_page_id")]
    pub page_id: String,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    #[serde(default = "default_slack_base_url")]
    pub base_url: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            base_url: default_slack_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_page_id() -> String {
    DEFAULT_DIRECTORY_PAGE_ID.to_string()
}

fn default_slack_base_url() -> String {
    DEFAULT_SLACK_BASE_URL.to_string()
}

fn default_port() -> u16 {
    DEFAULT_SERVER_PORT
}

/// Credentials never live in config.toml; they are read from the environment.
#[derive(Debug, Clone)]
pub struct Secrets {
    pub confluence_api_token: String,
    pub slack_token: String,
}

impl Config {
    /// Load from `$ROSTER_CONFIG`, falling back to `config.toml` in the working directory.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            RosterError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

impl Secrets {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            confluence_api_token: required_env(CONFLUENCE_TOKEN_ENV)?,
            slack_token: required_env(SLACK_TOKEN_ENV)?,
        })
    }
}

fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(RosterError::Config(format!(
            "Environment variable {name} must be set"
        ))),
    }
}
