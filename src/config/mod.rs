//! Configuration management.
//!
//! All settings are optional; with no file and no environment overrides the
//! client talks to the public arXiv endpoint with the default HTTP settings.
//!
//! # Configuration File Format
//!
//! ```toml
//! [api]
//! base_url = "http://export.arxiv.org/api/query"
//! timeout_secs = 30
//! user_agent = "my-tool/1.0"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every key can be overridden from the environment with the `ARXIV_CLI_`
//! prefix and `__` between nesting levels, e.g. `ARXIV_CLI_API__TIMEOUT_SECS=60`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::sources::ARXIV_API_URL;
use crate::utils::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "ARXIV_CLI";

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "arxiv-cli.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// arXiv API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// arXiv API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Query endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// User agent to send, falling back to `arxiv-cli/<version>`
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

fn default_base_url() -> String {
    ARXIV_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for the crate's own logs (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default)]
    pub level: Option<String>,
}

/// Load configuration from a file, with environment overrides on top
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    build(Some(path))
}

/// Get the configuration from environment overrides and defaults only
pub fn get_config() -> Result<Config, config::ConfigError> {
    build(None)
}

fn build(path: Option<&Path>) -> Result<Config, config::ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
    }

    builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

/// Locations searched for a config file, in priority order
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("arxiv-cli").join("config.toml"));
    }
    paths.push(PathBuf::from(LOCAL_CONFIG_FILE));
    paths
}

/// First existing config file from [`config_search_paths`]
pub fn find_config_file() -> Option<PathBuf> {
    config_search_paths().into_iter().find(|path| path.is_file())
}
