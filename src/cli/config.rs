//! Configuration file structure
//!
//! Every field is optional. A missing file path means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::executor::OrderingPolicy;
use crate::http_server::config::{default_api_keys, default_host, default_port};
use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::translate::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

use super::errors::{CliError, CliResult};

/// nlquery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON array of records
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Append-only audit file; in-memory when unset
    #[serde(default)]
    pub audit_log_path: Option<PathBuf>,

    #[serde(default = "default_api_keys")]
    pub api_keys: Vec<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_endpoint")]
    pub translator_endpoint: String,

    #[serde(default)]
    pub gemini_api_key: Option<String>,

    #[serde(default)]
    pub ordering: OrderingPolicy,

    #[serde(default = "default_true")]
    pub reject_invalid_queries: bool,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/sample-data.json")
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_path: default_data_path(),
            audit_log_path: None,
            api_keys: default_api_keys(),
            model: default_model(),
            translator_endpoint: default_endpoint(),
            gemini_api_key: None,
            ordering: OrderingPolicy::default(),
            reject_invalid_queries: true,
            log_format: LogFormat::default(),
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let config = match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;
                serde_json::from_str(&content)
                    .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?
            }
            None => Config::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Applies command-line and environment overrides, then revalidates
    pub fn with_overrides(mut self, port: Option<u16>, gemini_api_key: Option<String>) -> CliResult<Self> {
        if let Some(port) = port {
            self.port = port;
        }
        if gemini_api_key.is_some() {
            self.gemini_api_key = gemini_api_key;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.api_keys.is_empty() {
            return Err(CliError::config_error("api_keys must contain at least one key"));
        }

        if self.api_keys.iter().any(|key| key.trim().is_empty()) {
            return Err(CliError::config_error("api_keys must not contain blank keys"));
        }

        if self.model.trim().is_empty() {
            return Err(CliError::config_error("model must not be empty"));
        }

        Ok(())
    }

    /// The Gemini key, required by commands that call the translator
    pub fn require_gemini_key(&self) -> CliResult<&str> {
        match self.gemini_api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(CliError::config_error(
                "GEMINI_API_KEY is required (set the variable or gemini_api_key in the config)",
            )),
        }
    }

    /// HTTP server part of the configuration
    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
            api_keys: self.api_keys.clone(),
        }
    }
}
