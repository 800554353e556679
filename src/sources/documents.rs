//! Static JSON document retrieval from local paths or HTTP(S) URLs.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// Failure while loading a JSON document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Local file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Remote document could not be fetched.
    #[error("failed to fetch {url}: {source}")]
    Http {
        /// URL that was requested.
        url: String,
        /// Underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },
    /// Document body is not the expected JSON.
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        /// Path or URL of the document.
        origin: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Where a document lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentSource {
    /// File on disk.
    Path(PathBuf),
    /// `http://` or `https://` URL.
    Url(String),
}

impl DocumentSource {
    /// What: Classify a user-supplied location string.
    ///
    /// Inputs:
    /// - `raw`: Path or URL as written in settings or on the command line
    ///
    /// Output:
    /// - `Url` for `http://`/`https://` prefixes, `Path` otherwise
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }

    /// What: Resolve a document location against a data directory.
    ///
    /// Inputs:
    /// - `raw`: Configured location (may be empty)
    /// - `data_dir`: Directory holding the bundled documents
    /// - `file_name`: Default file name inside `data_dir`
    ///
    /// Output:
    /// - URL as-is, absolute paths as-is, relative paths joined onto `data_dir`
    #[must_use]
    pub fn resolve(raw: &str, data_dir: &Path, file_name: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Path(data_dir.join(file_name));
        }
        match Self::parse(raw) {
            Self::Path(p) if p.is_relative() => Self::Path(data_dir.join(p)),
            other => other,
        }
    }

    fn origin(&self) -> String {
        match self {
            Self::Path(p) => p.display().to_string(),
            Self::Url(u) => u.clone(),
        }
    }
}

/// What: Load and deserialize a JSON document once.
///
/// Inputs:
/// - `source`: Path or URL of the document
///
/// Output:
/// - Parsed document, or a [`DocumentError`] describing the failed step
///
/// # Errors
/// - `Io` when the file cannot be read
/// - `Http` when the request fails or returns a non-success status
/// - `Json` when the body does not match `T`
///
/// Details:
/// - No retries; callers log the error and continue without the document.
pub async fn fetch_document<T: DeserializeOwned>(source: &DocumentSource) -> Result<T, DocumentError> {
    let body = match source {
        DocumentSource::Path(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| DocumentError::Io {
                    path: path.clone(),
                    source: e,
                })?
        }
        DocumentSource::Url(url) => fetch_text(url).await?,
    };
    tracing::debug!(origin = %source.origin(), bytes = body.len(), "document loaded");
    serde_json::from_str(&body).map_err(|e| DocumentError::Json {
        origin: source.origin(),
        source: e,
    })
}

async fn fetch_text(url: &str) -> Result<String, DocumentError> {
    let wrap = |e| DocumentError::Http {
        url: url.to_string(),
        source: e,
    };
    reqwest::get(url)
        .await
        .map_err(wrap)?
        .error_for_status()
        .map_err(wrap)?
        .text()
        .await
        .map_err(wrap)
}
