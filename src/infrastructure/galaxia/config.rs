use std::fmt;
use std::time::Duration;

use crate::domain::{BackoffPolicy, DomainError};

pub const DEFAULT_N_RETRIES: u32 = 5;
pub const DEFAULT_WAIT_TIME_SECS: u64 = 2;

/// Connection and retry settings for the analysis service
///
/// Immutable once validated by [`GalaxiaClientConfig::validate`].
#[derive(Clone)]
pub struct GalaxiaClientConfig {
    /// Host (`beta.api.smabbler.com`) or full base URL
    pub api_url: String,
    pub api_key: String,
    /// Knowledge base the queries are analyzed against
    pub knowledge_base_id: String,
    /// Attempts per phase
    pub n_retries: u32,
    /// Base backoff wait
    pub wait_time: Duration,
}

impl GalaxiaClientConfig {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        knowledge_base_id: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            knowledge_base_id: knowledge_base_id.into(),
            n_retries: DEFAULT_N_RETRIES,
            wait_time: Duration::from_secs(DEFAULT_WAIT_TIME_SECS),
        }
    }

    pub fn with_n_retries(mut self, n_retries: u32) -> Self {
        self.n_retries = n_retries;
        self
    }

    pub fn with_wait_time(mut self, wait_time: Duration) -> Self {
        self.wait_time = wait_time;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.api_url.trim().is_empty() {
            return Err(DomainError::configuration("API URL is required"));
        }

        if self.api_key.trim().is_empty() {
            return Err(DomainError::configuration("API key is required"));
        }

        if self.knowledge_base_id.trim().is_empty() {
            return Err(DomainError::configuration("Knowledge base ID is required"));
        }

        if self.n_retries == 0 {
            return Err(DomainError::configuration(
                "n_retries must be at least 1",
            ));
        }

        Ok(())
    }

    /// Base URL with scheme; bare hosts are addressed over HTTPS
    pub fn base_url(&self) -> String {
        let url = self.api_url.trim().trim_end_matches('/');

        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        }
    }

    pub fn backoff(&self) -> BackoffPolicy {
        BackoffPolicy::new(self.n_retries, self.wait_time)
    }
}

impl fmt::Debug for GalaxiaClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalaxiaClientConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("knowledge_base_id", &self.knowledge_base_id)
            .field("n_retries", &self.n_retries)
            .field("wait_time", &self.wait_time)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalaxiaClientConfig::new("beta.api.smabbler.com", "key", "kb");
        assert_eq!(config.n_retries, 5);
        assert_eq!(config.wait_time, Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url() {
        let config = GalaxiaClientConfig::new("beta.api.smabbler.com/", "key", "kb");
        assert_eq!(config.base_url(), "https://beta.api.smabbler.com");

        let config = GalaxiaClientConfig::new("http://127.0.0.1:8080", "key", "kb");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(GalaxiaClientConfig::new("", "key", "kb").validate().is_err());
        assert!(GalaxiaClientConfig::new("host", " ", "kb").validate().is_err());
        assert!(GalaxiaClientConfig::new("host", "key", "").validate().is_err());
        assert!(GalaxiaClientConfig::new("host", "key", "kb")
            .with_n_retries(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GalaxiaClientConfig::new("host", "super-secret", "kb");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
