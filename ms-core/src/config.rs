//! Configuration management.
//!
//! Handles loading, saving, and accessing the client configuration: service
//! endpoint, credentials, and timeouts. Configuration is persisted as TOML on
//! disk.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{MsError, MsResult};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mediasite service connection settings.
    #[serde(default)]
    pub mediasite: MediasiteConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for a Mediasite server.
#[derive(Clone, Serialize, Deserialize)]
pub struct MediasiteConfig {
    /// URL of the Mediasite REST API (e.g. "https://example.edu/mediasite/api/v1/").
    #[serde(default)]
    pub endpoint: String,

    /// Username for API authentication.
    #[serde(default)]
    pub username: String,

    /// Password for API authentication.
    #[serde(default)]
    pub password: String,

    /// API key sent with every request.
    #[serde(default)]
    pub api_key: String,

    /// Resource id of the folder that browsing starts from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder_id: Option<String>,

    /// Site root hosting `FileServer/` uploads. Derived from the endpoint when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_server_url: Option<String>,

    /// Port of the recorders' embedded web API.
    #[serde(default = "default_recorder_api_port")]
    pub recorder_api_port: u16,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,

    /// Raw upload timeout in milliseconds.
    #[serde(default = "default_upload_timeout")]
    pub upload_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_recorder_api_port() -> u16 {
    constants::RECORDER_API_PORT
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_upload_timeout() -> u64 {
    constants::DEFAULT_UPLOAD_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for MediasiteConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            username: String::new(),
            password: String::new(),
            api_key: String::new(),
            root_folder_id: None,
            file_server_url: None,
            recorder_api_port: default_recorder_api_port(),
            api_timeout_ms: default_api_timeout(),
            upload_timeout_ms: default_upload_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

// Credentials stay out of logs.
impl fmt::Debug for MediasiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediasiteConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"***")
            .field("api_key", &"***")
            .field("root_folder_id", &self.root_folder_id)
            .field("file_server_url", &self.file_server_url)
            .field("recorder_api_port", &self.recorder_api_port)
            .field("api_timeout_ms", &self.api_timeout_ms)
            .field("upload_timeout_ms", &self.upload_timeout_ms)
            .finish()
    }
}

impl MediasiteConfig {
    /// Build a configuration from endpoint and credentials, defaults elsewhere.
    pub fn new(endpoint: &str, username: &str, password: &str, api_key: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            api_key: api_key.to_string(),
            ..Self::default()
        }
    }

    /// Set the folder that browsing starts from.
    pub fn with_root_folder(mut self, root_folder_id: &str) -> Self {
        self.root_folder_id = Some(root_folder_id.to_string());
        self
    }

    /// Whether endpoint and credentials are all present.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.username.is_empty() && !self.api_key.is_empty()
    }

    /// The API endpoint, normalized with a scheme and a trailing slash.
    pub fn api_root(&self) -> String {
        AppConfig::sanitize_endpoint(&self.endpoint)
    }

    /// Site root for `FileServer/` uploads.
    ///
    /// Uses `file_server_url` when set, otherwise the endpoint with its
    /// trailing `api/v1/` removed.
    pub fn file_server_root(&self) -> String {
        if let Some(url) = self.file_server_url.as_deref().filter(|u| !u.is_empty()) {
            return AppConfig::sanitize_endpoint(url);
        }
        let api_root = self.api_root();
        match api_root.strip_suffix(constants::API_PATH_SUFFIX) {
            Some(site_root) => site_root.to_string(),
            None => api_root,
        }
    }

    /// Base URL of a recorder's embedded web API.
    pub fn recorder_api_root(&self, recorder_host: &str) -> String {
        format!(
            "http://{}:{}/{}",
            recorder_host.trim().trim_end_matches('/'),
            self.recorder_api_port,
            constants::RECORDER_API_PATH
        )
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> MsResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> MsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> MsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| MsError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    ///
    /// - Windows: `%APPDATA%/Mediasite/config.toml`
    /// - macOS: `~/Library/Application Support/Mediasite/config.toml`
    /// - Linux: `~/.config/Mediasite/config.toml`
    pub fn default_config_path() -> MsResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| MsError::Config("could not determine config directory".into()))?;
        Ok(base.join(constants::APP_NAME).join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> MsResult<PathBuf> {
        if self.logging.directory.is_empty() {
            let base = dirs::data_dir()
                .ok_or_else(|| MsError::Config("could not determine data directory".into()))?;
            Ok(base.join(constants::APP_NAME).join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Check whether the Mediasite connection is configured.
    pub fn is_configured(&self) -> bool {
        self.mediasite.is_configured()
    }

    /// Sanitize and normalize an endpoint URL.
    ///
    /// Ensures the address has a scheme (https by default) and ends with
    /// exactly one slash so relative resource paths join beneath it.
    pub fn sanitize_endpoint(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        format!("{}/", with_scheme.trim_end_matches('/'))
    }
}
