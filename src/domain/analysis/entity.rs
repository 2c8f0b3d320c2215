//! Analysis domain entities

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Status string the service reports once an operation has finished
pub const PROCESSED_STATUS: &str = "processed";

/// Server-assigned handle for one submitted analysis
///
/// Only ever created from a submit response and consumed by the poll and
/// fetch phases of the same query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OperationId(String);

impl OperationId {
    /// Create a new operation ID, rejecting empty handles
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(DomainError::validation("Operation ID cannot be empty"));
        }

        Ok(Self(id))
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OperationId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OperationId> for String {
    fn from(id: OperationId) -> Self {
        id.0
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OperationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Status of a remote analysis operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    /// Still running; carries the raw status reported by the service
    Pending(String),

    /// Finished, results can be fetched
    Processed,
}

impl OperationStatus {
    /// Interpret the raw `status` field of a status response
    pub fn from_wire(status: Option<&str>) -> Self {
        match status {
            Some(PROCESSED_STATUS) => Self::Processed,
            Some(other) => Self::Pending(other.to_string()),
            None => Self::Pending(String::new()),
        }
    }

    pub fn is_processed(&self) -> bool {
        matches!(self, Self::Processed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending(raw) => raw,
            Self::Processed => PROCESSED_STATUS,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One matched record returned by the result phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Matched text
    pub text: String,
    /// Identifier of the model that produced the match
    pub model: String,
    /// Source group (file) identifier
    pub group: String,
    /// Relevance rank
    pub rank: f64,
    /// Category / content string
    pub category: String,
}

impl ResultItem {
    pub fn new(
        text: impl Into<String>,
        model: impl Into<String>,
        group: impl Into<String>,
        rank: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            group: group.into(),
            rank,
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_id_rejects_empty() {
        assert!(OperationId::new("").is_err());
        assert!(OperationId::new("   ").is_err());
        assert_eq!(OperationId::new("op1").unwrap().as_str(), "op1");
    }

    #[test]
    fn test_operation_id_deserialize_validates() {
        let id: OperationId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id.to_string(), "abc");

        let empty: Result<OperationId, _> = serde_json::from_str("\"\"");
        assert!(empty.is_err());
    }

    #[test]
    fn test_status_from_wire() {
        assert_eq!(
            OperationStatus::from_wire(Some("processed")),
            OperationStatus::Processed
        );
        assert_eq!(
            OperationStatus::from_wire(Some("processing")),
            OperationStatus::Pending("processing".to_string())
        );
        assert_eq!(
            OperationStatus::from_wire(None),
            OperationStatus::Pending(String::new())
        );
        // status comparison is exact
        assert!(!OperationStatus::from_wire(Some("Processed")).is_processed());
    }

    #[test]
    fn test_result_item_deserialize() {
        let json = serde_json::json!({
            "text": "q",
            "model": "m1",
            "group": "g1",
            "rank": 0.9,
            "category": "Paris"
        });

        let item: ResultItem = serde_json::from_value(json).unwrap();
        assert_eq!(item, ResultItem::new("q", "m1", "g1", 0.9, "Paris"));
    }
}
