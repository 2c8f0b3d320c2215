//! Domain layer - Core types and traits

pub mod analysis;
pub mod error;
pub mod retriever;

pub use analysis::{
    AnalysisError, BackoffPolicy, OperationId, OperationStatus, QueryState, ResultItem,
    PROCESSED_STATUS,
};
pub use error::DomainError;
#[cfg(test)]
pub use retriever::MockRetriever;
pub use retriever::{Document, Retriever};
