use async_trait::async_trait;
use tracing::warn;

use super::client::GalaxiaClient;
use crate::domain::{AnalysisError, Document, DomainError, Retriever};
use crate::infrastructure::http_client::HttpClientTrait;

/// [`Retriever`] backed by the analysis service
///
/// Each result item becomes a document whose content is the item's category,
/// with `query`, `model`, `file` and `score` metadata.
#[derive(Debug)]
pub struct GalaxiaRetriever<C: HttpClientTrait> {
    client: GalaxiaClient<C>,
}

impl<C: HttpClientTrait> GalaxiaRetriever<C> {
    pub fn new(client: GalaxiaClient<C>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GalaxiaClient<C> {
        &self.client
    }
}

#[async_trait]
impl<C: HttpClientTrait> Retriever for GalaxiaRetriever<C> {
    fn retriever_type(&self) -> &'static str {
        "galaxia"
    }

    async fn get_relevant_documents(&self, query: &str) -> Result<Vec<Document>, DomainError> {
        match self.client.retrieve(query.trim()).await {
            Ok(items) => Ok(items.into_iter().map(Document::from).collect()),
            Err(e) if e.is_exhausted() => {
                warn!(error = %e, "Query produced no result");
                Ok(Vec::new())
            }
            Err(AnalysisError::Transport(e)) => Err(e),
            Err(e) => Err(DomainError::internal(e.to_string())),
        }
    }
}
