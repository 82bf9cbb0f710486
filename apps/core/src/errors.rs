use thiserror::Error;

/// Core error type shared by every service client and submission path.
///
/// Pure functions in `catalog`, `gallery` and `reviews` never return this
/// for out-of-range or empty input — they degrade to safe defaults. Only
/// malformed required input (an unparsable year, an invalid review draft)
/// and transport failures surface as errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No session, or the backend rejected the session (401/403).
    /// Callers are expected to route the user to login.
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Validation error: {0}")]
    Validation(String),

    /// Request failed or timed out before a response arrived.
    /// The operation is abandoned; nothing here retries automatically.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Network(format!("request timed out: {err}"))
        } else if err.is_decode() {
            Error::Network(format!("malformed response body: {err}"))
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl Error {
    /// True when the caller should treat the session as gone and redirect
    /// to login (expired token and logged-out look identical here).
    pub fn is_authentication_required(&self) -> bool {
        matches!(self, Error::AuthenticationRequired)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
