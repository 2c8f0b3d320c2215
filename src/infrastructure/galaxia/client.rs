//! Client for the asynchronous analysis service

use std::time::Duration;

use tracing::instrument;

use super::config::GalaxiaClientConfig;
use super::session::AnalysisSession;
use crate::domain::{AnalysisError, DomainError, ResultItem};
use crate::infrastructure::http_client::{HttpClient, HttpClientTrait};

/// Polling query client
///
/// Each [`retrieve`](GalaxiaClient::retrieve) runs submit, poll and fetch in
/// its own [`AnalysisSession`]; calls share only the immutable configuration
/// and the transport.
#[derive(Debug)]
pub struct GalaxiaClient<C: HttpClientTrait> {
    http: C,
    config: GalaxiaClientConfig,
    base_url: String,
}

impl GalaxiaClient<HttpClient> {
    /// Create a client over a reqwest transport
    pub fn connect(
        config: GalaxiaClientConfig,
        request_timeout: Option<Duration>,
    ) -> Result<Self, DomainError> {
        let http = match request_timeout {
            Some(timeout) => HttpClient::with_timeout(timeout)?,
            None => HttpClient::new()?,
        };

        Self::new(http, config)
    }
}

impl<C: HttpClientTrait> GalaxiaClient<C> {
    pub fn new(http: C, config: GalaxiaClientConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let base_url = config.base_url();

        Ok(Self {
            http,
            config,
            base_url,
        })
    }

    pub fn config(&self) -> &GalaxiaClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn http(&self) -> &C {
        &self.http
    }

    pub(super) fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("X-Api-Key", self.config.api_key.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    /// Start a new query lifecycle
    pub fn open_session(&self) -> AnalysisSession<'_, C> {
        AnalysisSession::open(self)
    }

    /// Submit `query`, wait for it to be processed and return its results
    ///
    /// `Ok` with an empty list means the service found nothing; an exhausted
    /// retry budget is reported as [`AnalysisError::SubmissionFailed`] or
    /// [`AnalysisError::ProcessingTimedOut`].
    #[instrument(
        skip(self, query),
        fields(knowledge_base_id = %self.config.knowledge_base_id, query_len = query.len())
    )]
    pub async fn retrieve(&self, query: &str) -> Result<Vec<ResultItem>, AnalysisError> {
        let mut session = self.open_session();

        session.submit(query).await?;
        session.poll().await?;
        session.fetch().await
    }
}


#[cfg(test)]
mod wire_tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_retrieve_over_http() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/analyze/initialize"))
            .and(header("X-Api-Key", "key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"operationId": "op1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/analyze/status"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "processed"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/analyze/result"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": {"resultItems": [
                    {"text": "q", "model": "m1", "group": "g1", "rank": 0.9, "category": "Paris"}
                ]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = GalaxiaClientConfig::new(server.uri(), "key", "kb")
            .with_n_retries(2)
            .with_wait_time(Duration::ZERO);
        let client = GalaxiaClient::connect(config, Some(Duration::from_secs(5))).unwrap();

        let items = client.retrieve("capital of France").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, "Paris");
    }

    #[tokio::test]
    async fn test_http_error_surfaces_as_transport() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let config = GalaxiaClientConfig::new(server.uri(), "wrong", "kb")
            .with_wait_time(Duration::ZERO);
        let client = GalaxiaClient::connect(config, None).unwrap();

        let err = client.retrieve("q").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Transport(_)));
        assert!(err.to_string().contains("401"));
    }
}
