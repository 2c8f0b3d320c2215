//! Galaxia analysis service integration

mod client;
mod config;
mod retriever;
mod session;
mod wire;

pub use client::GalaxiaClient;
pub use config::{GalaxiaClientConfig, DEFAULT_N_RETRIES, DEFAULT_WAIT_TIME_SECS};
pub use retriever::GalaxiaRetriever;
pub use session::AnalysisSession;
