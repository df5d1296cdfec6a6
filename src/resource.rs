//! Startup resource loading: local paths and `http(s)://` URLs to bytes.

use std::path::PathBuf;

/// Errors raised while loading a resource.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch {url}: server answered {status}")]
    Status { url: String, status: u16 },
}

/// Whether `location` names a remote resource.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Load the bytes at `location`, a filesystem path or an `http(s)://` URL.
pub async fn load(location: &str) -> Result<Vec<u8>, ResourceError> {
    if is_remote(location) {
        fetch(location).await
    } else {
        tokio::fs::read(location).await.map_err(|source| ResourceError::Io {
            path: PathBuf::from(location),
            source,
        })
    }
}

async fn fetch(url: &str) -> Result<Vec<u8>, ResourceError> {
    let http = |source| ResourceError::Http { url: url.to_owned(), source };
    let resp = reqwest::get(url).await.map_err(http)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ResourceError::Status { url: url.to_owned(), status: status.as_u16() });
    }
    let body = resp.bytes().await.map_err(http)?;
    tracing::debug!(url, bytes = body.len(), "fetched resource");
    Ok(body.to_vec())
}
