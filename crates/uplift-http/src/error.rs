use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Reqwest client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Response failed with status {status}: {body}")]
    StatusCode { status: http::StatusCode, body: String },

    #[error(transparent)]
    Http(#[from] http::Error),

    #[error("Operation timed out")]
    Timeout,
}

impl Error {
    /// Whether a later attempt of the same request may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Client(e) => e.is_connect() || e.is_timeout(),
            Self::StatusCode { status, .. } => {
                status.is_server_error() || *status == http::StatusCode::TOO_MANY_REQUESTS
            }
            Self::Http(_) => false,
            Self::Timeout => true,
        }
    }
}
