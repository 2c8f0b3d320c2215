//! Analysis service request and response bodies

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, ResultItem};

pub const INITIALIZE_PATH: &str = "/analyze/initialize";
pub const STATUS_PATH: &str = "/analyze/status";
pub const RESULT_PATH: &str = "/analyze/result";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest<'a> {
    pub algorithm_version: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest<'a> {
    pub operation_id: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    #[serde(default)]
    pub operation_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResultResponse {
    pub result: ResultEnvelope,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub result_items: Vec<ResultItem>,
}

pub fn to_body<T: Serialize>(payload: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(payload)
        .map_err(|e| DomainError::internal(format!("Failed to serialize request: {}", e)))
}

/// Decode a submit or status reply; replies that are not objects of the
/// expected shape count as "field absent"
pub fn parse_lenient<T: for<'de> Deserialize<'de> + Default>(json: serde_json::Value) -> T {
    serde_json::from_value(json).unwrap_or_default()
}

pub fn parse_result(json: serde_json::Value) -> Result<Vec<ResultItem>, DomainError> {
    let response: ResultResponse = serde_json::from_value(json).map_err(|e| {
        DomainError::provider("galaxia", format!("Failed to parse result response: {}", e))
    })?;

    Ok(response.result.result_items)
}
