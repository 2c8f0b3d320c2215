//! Retriever domain module

mod document;
mod provider;

pub use document::Document;
#[cfg(test)]
pub use provider::MockRetriever;
pub use provider::Retriever;
