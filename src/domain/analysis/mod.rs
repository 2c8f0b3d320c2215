//! Analysis domain module for submit/poll/fetch queries

mod backoff;
mod entity;
mod error;
mod state;

pub use backoff::BackoffPolicy;
pub use entity::{OperationId, OperationStatus, ResultItem, PROCESSED_STATUS};
pub use error::AnalysisError;
pub use state::QueryState;
