use thiserror::Error;

/// Errors returned by the remote user service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL rejected or endpoint URL could not be built
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    /// Network unreachable, timeout or connection reset
    #[error("unable to reach the server: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("request failed ({status}): {body}")]
    Http { status: u16, body: String },

    /// Response did not match the expected envelope or record shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failed request, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
