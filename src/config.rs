//! Configuration for the Cloud Tasks client
//!
//! Values come from, in increasing precedence:
//! - Built-in defaults
//! - TOML and YAML configuration files
//! - `TASK_SUBMITTER_*` environment variables
//! - The unprefixed `CLOUD_TASKS_ENDPOINT` and `GOOGLE_OAUTH_ACCESS_TOKEN` variables

use crate::TaskSubmitError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "https://cloudtasks.googleapis.com";

/// Main configuration structure for task submission
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubmitterConfig {
    /// Service endpoint configuration
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Credentials handed to the client
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

/// Service endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL of the Cloud Tasks REST API
    pub url: String,

    /// Request timeout in seconds. No timeout when unset.
    pub timeout_seconds: Option<u64>,
}

/// Explicit credentials
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct CredentialsConfig {
    /// OAuth2 access token sent as a bearer token
    pub access_token: Option<String>,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("CLOUD_TASKS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            timeout_seconds: None,
        }
    }
}

impl SubmitterConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), TaskSubmitError> {
        if self.endpoint.url.is_empty() {
            return Err(TaskSubmitError::Configuration(
                "Endpoint URL cannot be empty".to_string(),
            ));
        }

        if !self.endpoint.url.starts_with("https://") && !self.endpoint.url.starts_with("http://")
        {
            return Err(TaskSubmitError::Configuration(
                "Endpoint URL must start with http:// or https://".to_string(),
            ));
        }

        if let Some(timeout) = self.endpoint.timeout_seconds {
            if timeout == 0 || timeout > 300 {
                return Err(TaskSubmitError::Configuration(
                    "Request timeout must be between 1 and 300 seconds".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Defaults with the access token taken from `GOOGLE_OAUTH_ACCESS_TOKEN`
    fn with_env_credentials() -> Self {
        let mut config = Self::default();
        config.credentials.access_token = std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        config
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, TaskSubmitError> {
        let mut config = Self::with_env_credentials();

        if let Ok(timeout) = std::env::var("CLOUD_TASKS_TIMEOUT_SECONDS") {
            config.endpoint.timeout_seconds = Some(timeout.parse().map_err(|_| {
                TaskSubmitError::Configuration("Invalid CLOUD_TASKS_TIMEOUT_SECONDS".to_string())
            })?);
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a file (TOML or YAML based on extension)
    #[cfg(feature = "config")]
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, TaskSubmitError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TaskSubmitError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: SubmitterConfig = if path.extension().and_then(|s| s.to_str()) == Some("toml")
        {
            toml::from_str(&contents).map_err(|e| {
                TaskSubmitError::Configuration(format!("Failed to parse TOML config: {}", e))
            })?
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                TaskSubmitError::Configuration(format!("Failed to parse YAML config: {}", e))
            })?
        };

        config.validate()?;

        Ok(config)
    }

    /// Load configuration with automatic source detection and validation
    #[cfg(feature = "config")]
    pub fn load() -> Result<Self, TaskSubmitError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).map_err(|e| {
                TaskSubmitError::Configuration(format!("Failed to create default config: {}", e))
            })?,
        );

        for config_path in &[
            "cloud-tasks.toml",
            "cloud-tasks.yaml",
            "cloud-tasks.yml",
            "config/cloud-tasks.toml",
            "config/cloud-tasks.yaml",
            "config/cloud-tasks.yml",
        ] {
            if std::path::Path::new(config_path).exists() {
                builder = builder.add_source(File::with_name(config_path));
                break;
            }
        }

        // TASK_SUBMITTER_ENDPOINT__TIMEOUT_SECONDS=30 -> endpoint.timeout_seconds
        builder = builder.add_source(
            Environment::with_prefix("TASK_SUBMITTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(endpoint) = std::env::var("CLOUD_TASKS_ENDPOINT") {
            builder = builder.set_override("endpoint.url", endpoint).map_err(|e| {
                TaskSubmitError::Configuration(format!(
                    "Failed to set CLOUD_TASKS_ENDPOINT override: {}",
                    e
                ))
            })?;
        }

        if let Ok(token) = std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN") {
            if !token.is_empty() {
                builder = builder
                    .set_override("credentials.access_token", token)
                    .map_err(|e| {
                        TaskSubmitError::Configuration(format!(
                            "Failed to set GOOGLE_OAUTH_ACCESS_TOKEN override: {}",
                            e
                        ))
                    })?;
            }
        }

        let config = builder
            .build()
            .map_err(|e| TaskSubmitError::Configuration(format!("Failed to build config: {}", e)))?;

        let config: SubmitterConfig = config.try_deserialize().map_err(|e| {
            TaskSubmitError::Configuration(format!("Failed to deserialize config: {}", e))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration without the config crate (fallback)
    #[cfg(not(feature = "config"))]
    pub fn load() -> Result<Self, TaskSubmitError> {
        Self::from_env()
    }
}

/// Configuration builder for fluent API
#[derive(Default)]
pub struct ConfigBuilder {
    config: SubmitterConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint.url = url.into();
        self
    }

    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.config.endpoint.timeout_seconds = Some(seconds);
        self
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.credentials.access_token = Some(token.into());
        self
    }

    pub fn build(self) -> SubmitterConfig {
        self.config
    }
}
