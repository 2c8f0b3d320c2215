//! Retriever trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::Document;
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Turns a free-text query into relevant documents
///
/// Implementations absorb their backend's expected failures (an exhausted
/// retry budget, say) as an empty list; only faults the caller could act on
/// are returned as errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Retriever: Send + Sync + Debug {
    /// Get the retriever type name
    fn retriever_type(&self) -> &'static str;

    /// Fetch the documents relevant to `query`
    async fn get_relevant_documents(&self, query: &str) -> Result<Vec<Document>, DomainError>;
}
