use thiserror::Error;

/// Top-level error type for the `catalyst-api` crate.
///
/// Every upstream call lands in exactly one of these buckets. The
/// `Display` text is what callers on both surfaces ultimately see, so the
/// wording is part of the contract.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Upstream answered 401.
    #[error("Authentication failed. Check your API token.")]
    AuthFailure,

    // ── Throttling ──────────────────────────────────────────────────
    /// Upstream answered 429. The request is not resubmitted.
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    // ── Upstream status ─────────────────────────────────────────────
    /// Any other non-2xx answer, with the raw response body.
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    // ── Transport ───────────────────────────────────────────────────
    /// DNS failure, connection refused, TLS handshake, timeout.
    #[error("Network error: {message}")]
    Network { message: String },

    // ── Everything else ─────────────────────────────────────────────
    /// Undecodable body, bad URL, client construction failure.
    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

impl Error {
    /// HTTP status carried by this error, if it came from an upstream answer.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthFailure => Some(401),
            Self::RateLimited => Some(429),
            Self::Api { status, .. } => Some(*status),
            Self::Network { .. } | Self::Unexpected { .. } => None,
        }
    }

    pub(crate) fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Builder errors never reached the wire.
        if err.is_builder() {
            Self::unexpected(err.to_string())
        } else {
            Self::Network {
                message: err.to_string(),
            }
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::unexpected(format!("invalid URL: {err}"))
    }
}
