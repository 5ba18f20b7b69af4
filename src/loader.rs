// src/loader.rs

use reqwest::Client;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::fetch::read_source;
use crate::parse::parse_dataset;
use crate::record::Dataset;

/// Reads one delimited document and turns it into keyed records.
///
/// Every call performs a fresh read; nothing is cached between calls and
/// concurrent calls are not merged. No timeout is applied here: wrap the
/// future in `tokio::time::timeout`, or hand in a client built with one.
#[derive(Debug, Clone)]
pub struct TabularDataLoader {
    client: Client,
    config: LoaderConfig,
}

impl TabularDataLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: LoaderConfig) -> Self {
        TabularDataLoader { client, config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Fetch the configured document and parse it, header row first.
    /// Read and parse failures are returned as-is; no partial dataset.
    pub async fn fetch_data(&self) -> Result<Dataset, LoadError> {
        let source = &self.config.source;
        let start = Instant::now();

        let body = read_source(&self.client, source).await.map_err(|e| {
            warn!(%source, error = %e, "read failed");
            e
        })?;

        let dataset = parse_dataset(&body, &self.config.options).map_err(|e| {
            warn!(%source, error = %e, "parse failed");
            LoadError::from(e)
        })?;

        info!(
            %source,
            bytes = body.len(),
            rows = dataset.len(),
            elapsed = ?start.elapsed(),
            "loaded dataset"
        );
        Ok(dataset)
    }
}
