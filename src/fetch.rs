use gloo_net::http::Request;
use thiserror::Error;

/// Why a report body could not be read. The `Display` text is shown to the
/// reader inside the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),
    #[error("Failed to load report (HTTP {status})")]
    Status { status: u16 },
    #[error("{0}")]
    Body(String),
}

impl FetchError {
    fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    fn body<E: std::fmt::Display>(err: E) -> Self {
        Self::Body(err.to_string())
    }
}

/// Reads a page-relative document as text.
pub async fn fetch_document(path: &str) -> Result<String, FetchError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(FetchError::network)?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
        });
    }

    response.text().await.map_err(FetchError::body)
}
