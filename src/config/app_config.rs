use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::galaxia::{
    GalaxiaClientConfig, DEFAULT_N_RETRIES, DEFAULT_WAIT_TIME_SECS,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub galaxia: GalaxiaSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Deserialize)]
pub struct GalaxiaSettings {
    pub api_url: String,
    pub api_key: String,
    pub knowledge_base_id: String,
    #[serde(default = "default_n_retries")]
    pub n_retries: u32,
    #[serde(default = "default_wait_time_secs")]
    pub wait_time_secs: u64,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_n_retries() -> u32 {
    DEFAULT_N_RETRIES
}

fn default_wait_time_secs() -> u64 {
    DEFAULT_WAIT_TIME_SECS
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl GalaxiaSettings {
    pub fn client_config(&self) -> GalaxiaClientConfig {
        GalaxiaClientConfig::new(&self.api_url, &self.api_key, &self.knowledge_base_id)
            .with_n_retries(self.n_retries)
            .with_wait_time(Duration::from_secs(self.wait_time_secs))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl fmt::Debug for GalaxiaSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalaxiaSettings")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("knowledge_base_id", &self.knowledge_base_id)
            .field("n_retries", &self.n_retries)
            .field("wait_time_secs", &self.wait_time_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// Layered load: `config/default`, `config/local`, then `APP__*` env vars
    /// (for example `APP__GALAXIA__API_KEY`)
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(environment())
    }

    fn load_with(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }
}

/// Values stay strings; numeric fields are coerced on deserialization so IDs
/// and keys like `0042` keep their leading zeros
fn environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("__")
        .separator("__")
}
