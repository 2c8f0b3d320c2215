//! Galaxia client
//!
//! Client for an asynchronous knowledge-base analysis service:
//! - Submit a query and obtain an operation handle
//! - Poll the operation with linear backoff until it is processed
//! - Fetch the matched result items and map them to documents

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{AnalysisError, Document, DomainError, ResultItem, Retriever};
pub use infrastructure::galaxia::{GalaxiaClient, GalaxiaClientConfig, GalaxiaRetriever};
