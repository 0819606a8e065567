// src/core/config_manager.rs
//! Client configuration - base URL and transport timeout

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3010";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigSections {
    local: Option<ClientConfig>,
    production: Option<ClientConfig>,
}

// Flat is tried first; unknown keys make it fall through to the sections
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Flat(ClientConfig),
    Sectioned(ConfigSections),
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
        .normalized()
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build configuration from a variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("CANDIDATE_API_URL")
            .or_else(|| lookup("API_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_seconds = match lookup("CANDIDATE_API_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("CANDIDATE_API_TIMEOUT_SECS must be a number of seconds, got: {}", raw)
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        info!("Candidate API base URL: {}", base_url);

        Ok(Self {
            base_url,
            timeout_seconds,
        }
        .normalized())
    }

    /// Load configuration from a YAML file, picking the section for `ENVIRONMENT`
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        info!("Loading client configuration for environment: {}", environment);

        let config_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_yaml_str(&config_content, &environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse either a flat document or one split into `local`/`production`
    pub fn from_yaml_str(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile =
            serde_yaml::from_str(content).context("Invalid client configuration")?;

        let config = match config_file {
            ConfigFile::Flat(config) => config,
            ConfigFile::Sectioned(sections) => {
                let (name, section) = match environment {
                    "production" => ("production", sections.production),
                    _ => ("local", sections.local),
                };
                section.ok_or_else(|| {
                    anyhow::anyhow!("No `{}` section in client configuration", name)
                })?
            }
        };

        Ok(config.normalized())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Absolute URL for an endpoint path such as `/upload`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn normalized(mut self) -> Self {
        let trimmed_len = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed_len);
        self
    }
}
