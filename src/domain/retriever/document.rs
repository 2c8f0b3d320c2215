//! Retrieved document representation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::analysis::ResultItem;

/// A retrieved piece of content plus its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Content text
    pub page_content: String,
    /// Metadata key-value pairs
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Document {
    /// Create a new document
    pub fn new(page_content: impl Into<String>) -> Self {
        Self {
            page_content: page_content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Add metadata to the document
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

impl From<ResultItem> for Document {
    fn from(item: ResultItem) -> Self {
        Document::new(item.category)
            .with_metadata("query", serde_json::json!(item.text))
            .with_metadata("model", serde_json::json!(item.model))
            .with_metadata("file", serde_json::json!(item.group))
            .with_metadata("score", serde_json::json!(item.rank))
    }
}
