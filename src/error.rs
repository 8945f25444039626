use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Why a request to the job search API did not produce a result list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("API unreachable: {0}")]
    Unreachable(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Request failed: {0}")]
    Request(String),
}

impl SearchError {
    /// Short label for the status line.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Unreachable(_) => "unreachable",
            SearchError::Api { .. } => "server error",
            SearchError::Malformed(_) => "malformed response",
            SearchError::Request(_) => "request failed",
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            SearchError::Unreachable(err.to_string())
        } else if err.is_decode() {
            SearchError::Malformed(err.to_string())
        } else {
            SearchError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Malformed(err.to_string())
    }
}
