// src/fetch/http.rs

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::LoadError;

/// GET `url` and return the body. Non-success statuses are errors.
pub async fn get_body(client: &Client, url: &Url) -> Result<Vec<u8>, LoadError> {
    debug!(%url, "fetching document");
    let resp = client.get(url.clone()).send().await?.error_for_status()?;
    let status = resp.status();
    let body = resp.bytes().await?;
    debug!(%url, %status, bytes = body.len(), "fetched document");
    Ok(body.to_vec())
}
