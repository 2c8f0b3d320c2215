//! One submit/poll/fetch lifecycle

use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::client::GalaxiaClient;
use super::wire::{
    self, OperationRequest, StatusResponse, SubmitRequest, SubmitResponse, INITIALIZE_PATH,
    RESULT_PATH, STATUS_PATH,
};
use crate::domain::{AnalysisError, OperationId, OperationStatus, QueryState, ResultItem};
use crate::infrastructure::http_client::HttpClientTrait;

/// Per-query session over the client's shared transport
///
/// Owns the operation handle and lifecycle state of exactly one query; the
/// handle never outlives the session. The underlying connection belongs to
/// the client's pooled transport and is closed by the pool once idle.
#[derive(Debug)]
pub struct AnalysisSession<'a, C: HttpClientTrait> {
    client: &'a GalaxiaClient<C>,
    state: QueryState,
    operation_id: Option<OperationId>,
}

impl<'a, C: HttpClientTrait> AnalysisSession<'a, C> {
    pub(super) fn open(client: &'a GalaxiaClient<C>) -> Self {
        debug!(base_url = %client.base_url(), "Analysis session opened");

        Self {
            client,
            state: QueryState::Init,
            operation_id: None,
        }
    }

    pub fn state(&self) -> QueryState {
        self.state
    }

    pub fn operation_id(&self) -> Option<&OperationId> {
        self.operation_id.as_ref()
    }

    /// Send the query until the service hands back an operation ID
    pub async fn submit(&mut self, query: &str) -> Result<OperationId, AnalysisError> {
        self.require(QueryState::Init, "submit")?;

        let backoff = self.client.config().backoff();
        let body = wire::to_body(&SubmitRequest {
            algorithm_version: &self.client.config().knowledge_base_id,
            text: query,
        })?;

        for attempt in backoff.submit_attempts() {
            let delay = backoff.submit_delay(attempt);
            if !delay.is_zero() {
                sleep(delay).await;
            }

            let reply = self.send(INITIALIZE_PATH, &body).await?;
            let response: SubmitResponse = wire::parse_lenient(reply);

            match response.operation_id.map(OperationId::new) {
                Some(Ok(operation_id)) => {
                    info!(
                        operation_id = %operation_id,
                        attempt = attempt + 1,
                        "Query submitted"
                    );
                    self.operation_id = Some(operation_id.clone());
                    self.transition(QueryState::Submitted)?;
                    return Ok(operation_id);
                }
                _ => {
                    debug!(attempt = attempt + 1, "No operation ID in submit response");
                }
            }
        }

        warn!(
            attempts = backoff.max_attempts,
            "Submission failed, no operation ID returned"
        );
        self.transition(QueryState::Failed)?;

        Err(AnalysisError::submission_failed(backoff.max_attempts))
    }

    /// Check the operation status until it is processed
    pub async fn poll(&mut self) -> Result<(), AnalysisError> {
        self.require(QueryState::Submitted, "poll")?;
        let operation_id = self.handle("poll")?;

        self.transition(QueryState::Polling)?;

        let backoff = self.client.config().backoff();
        let body = wire::to_body(&OperationRequest {
            operation_id: operation_id.as_str(),
        })?;

        for attempt in backoff.poll_attempts() {
            let delay = backoff.poll_delay(attempt);
            if !delay.is_zero() {
                sleep(delay).await;
            }

            let reply = self.send(STATUS_PATH, &body).await?;
            let response: StatusResponse = wire::parse_lenient(reply);
            let status = OperationStatus::from_wire(response.status.as_deref());

            if status.is_processed() {
                info!(operation_id = %operation_id, attempt, "Operation processed");
                self.transition(QueryState::Completed)?;
                return Ok(());
            }

            debug!(operation_id = %operation_id, attempt, status = %status, "Operation pending");
        }

        warn!(
            operation_id = %operation_id,
            attempts = backoff.max_attempts,
            "Operation not processed within retry budget"
        );
        self.transition(QueryState::Failed)?;

        Err(AnalysisError::processing_timed_out(
            operation_id,
            backoff.max_attempts,
        ))
    }

    /// Fetch the result items of a processed operation
    pub async fn fetch(&mut self) -> Result<Vec<ResultItem>, AnalysisError> {
        self.require(QueryState::Completed, "fetch")?;
        let operation_id = self.handle("fetch")?;

        let body = wire::to_body(&OperationRequest {
            operation_id: operation_id.as_str(),
        })?;

        let reply = self.send(RESULT_PATH, &body).await?;
        let items = wire::parse_result(reply)?;

        info!(operation_id = %operation_id, count = items.len(), "Results fetched");

        Ok(items)
    }

    async fn send(
        &mut self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, AnalysisError> {
        let url = format!("{}{}", self.client.base_url(), path);

        let client = self.client;
        let result = client.http().post_json(&url, client.headers(), body).await;

        match result {
            Ok(reply) => Ok(reply),
            Err(e) => {
                warn!(path, error = %e, "Analysis request failed");
                if self.state.can_transition_to(QueryState::Failed) {
                    self.state = QueryState::Failed;
                }
                Err(e.into())
            }
        }
    }

    fn require(&self, expected: QueryState, action: &'static str) -> Result<(), AnalysisError> {
        if self.state != expected {
            return Err(AnalysisError::invalid_state(action, self.state));
        }
        Ok(())
    }

    fn handle(&self, action: &'static str) -> Result<OperationId, AnalysisError> {
        self.operation_id
            .clone()
            .ok_or_else(|| AnalysisError::invalid_state(action, self.state))
    }

    fn transition(&mut self, target: QueryState) -> Result<(), AnalysisError> {
        if !self.state.can_transition_to(target) {
            return Err(AnalysisError::invalid_state(target.as_str(), self.state));
        }

        debug!(from = %self.state, to = %target, "Query state changed");
        self.state = target;
        Ok(())
    }
}

impl<C: HttpClientTrait> Drop for AnalysisSession<'_, C> {
    fn drop(&mut self) {
        debug!(
            state = %self.state,
            operation_id = ?self.operation_id.as_ref().map(OperationId::as_str),
            "Analysis session closed"
        );
    }
}
