//! Query command - runs one query against the analysis service

use std::time::Duration;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::Retriever;
use crate::infrastructure::galaxia::{GalaxiaClient, GalaxiaRetriever};
use crate::infrastructure::logging;

/// Arguments for the query command
#[derive(Args, Clone, Debug)]
pub struct QueryArgs {
    /// Query text
    pub text: String,

    /// Print raw result items instead of documents
    #[arg(long)]
    pub raw: bool,

    /// Attempts per phase (overrides config)
    #[arg(long)]
    pub n_retries: Option<u32>,

    /// Base backoff wait in seconds (overrides config)
    #[arg(long)]
    pub wait_time: Option<u64>,
}

/// Run the query command
pub async fn run(args: QueryArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging)?;

    let mut client_config = config.galaxia.client_config();
    if let Some(n_retries) = args.n_retries {
        client_config = client_config.with_n_retries(n_retries);
    }
    if let Some(wait_time) = args.wait_time {
        client_config = client_config.with_wait_time(Duration::from_secs(wait_time));
    }

    let client = GalaxiaClient::connect(client_config, config.galaxia.request_timeout())?;

    let output = if args.raw {
        let items = client.retrieve(args.text.trim()).await?;
        serde_json::to_string_pretty(&items)?
    } else {
        let retriever = GalaxiaRetriever::new(client);
        render_documents(&retriever, &args.text).await?
    };

    println!("{}", output);

    Ok(())
}

/// Retrieve documents for `query` and render them as pretty JSON
pub async fn render_documents(retriever: &dyn Retriever, query: &str) -> anyhow::Result<String> {
    let documents = retriever.get_relevant_documents(query).await?;

    info!(
        retriever = retriever.retriever_type(),
        count = documents.len(),
        "Retrieved documents"
    );

    Ok(serde_json::to_string_pretty(&documents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Document, DomainError, MockRetriever};

    #[tokio::test]
    async fn test_render_documents() {
        let mut retriever = MockRetriever::new();
        retriever
            .expect_get_relevant_documents()
            .withf(|query| query == "capital of France")
            .times(1)
            .returning(|_| {
                Ok(vec![Document::new("Paris")
                    .with_metadata("score", serde_json::json!(0.9))])
            });
        retriever.expect_retriever_type().return_const("mock");

        let output = render_documents(&retriever, "capital of France")
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["page_content"], "Paris");
        assert_eq!(parsed[0]["metadata"]["score"], 0.9);
    }

    #[tokio::test]
    async fn test_render_empty_result() {
        let mut retriever = MockRetriever::new();
        retriever
            .expect_get_relevant_documents()
            .returning(|_| Ok(Vec::new()));
        retriever.expect_retriever_type().return_const("mock");

        let output = render_documents(&retriever, "nothing").await.unwrap();
        assert_eq!(output, "[]");
    }

    #[tokio::test]
    async fn test_render_propagates_errors() {
        let mut retriever = MockRetriever::new();
        retriever
            .expect_get_relevant_documents()
            .returning(|_| Err(DomainError::provider("http", "Request failed")));

        let err = render_documents(&retriever, "q").await.unwrap_err();
        assert!(err.to_string().contains("Request failed"));
    }
}
