// src/fetch/file.rs

use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::error::LoadError;

/// Read a document served from the local filesystem.
pub async fn read_body(path: &Path) -> Result<Vec<u8>, LoadError> {
    debug!(path = %path.display(), "reading document");
    let body = fs::read(path).await.map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = body.len(), "read document");
    Ok(body)
}
