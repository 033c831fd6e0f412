// ── Core error types ──
//
// The classification the forwarder produces, plus local validation
// failures. Both surfaces render these; the `Display` text is what the
// tool surface puts under `"error"` and what the route surface puts under
// `"detail"`.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Upstream classification ──────────────────────────────────────
    #[error("Authentication failed. Check your API token.")]
    AuthFailure,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Unexpected error: {message}")]
    Unexpected { message: String },

    // ── Local ────────────────────────────────────────────────────────
    /// Input rejected before any network call.
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<catalyst_api::Error> for CoreError {
    fn from(err: catalyst_api::Error) -> Self {
        match err {
            catalyst_api::Error::AuthFailure => Self::AuthFailure,
            catalyst_api::Error::RateLimited => Self::RateLimited,
            catalyst_api::Error::Api { status, body } => Self::Api { status, body },
            catalyst_api::Error::Network { message } => Self::Network { message },
            catalyst_api::Error::Unexpected { message } => Self::Unexpected { message },
        }
    }
}
