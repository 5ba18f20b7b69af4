// src/fetch/mod.rs

use reqwest::Client;

use crate::config::Source;
use crate::error::LoadError;

pub mod file;
pub mod http;

/// Read the whole document behind `source`. One outbound read per call.
pub async fn read_source(client: &Client, source: &Source) -> Result<Vec<u8>, LoadError> {
    match source {
        Source::Http(url) => http::get_body(client, url).await,
        Source::File(path) => file::read_body(path).await,
    }
}
