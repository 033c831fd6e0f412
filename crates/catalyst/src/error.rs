//! CLI error types with miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

use catalyst_config::ConfigError;
use catalyst_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("CATALYST_API_TOKEN environment variable is required")]
    #[diagnostic(
        code(catalyst::no_token),
        help(
            "Export CATALYST_API_TOKEN=<token>, or set api_token in {path}.\n\
             Tokens come from POST /dna/system/api/v1/auth/token on your Catalyst Center."
        )
    )]
    MissingToken { path: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(catalyst::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(catalyst::config))]
    Config(Box<figment::Error>),

    // ── Startup ──────────────────────────────────────────────────────
    #[error("Could not build the upstream client: {message}")]
    #[diagnostic(
        code(catalyst::client),
        help("Check ca_cert and the API token for stray characters.")
    )]
    Client { message: String },

    #[error("Could not listen on {addr}")]
    #[diagnostic(
        code(catalyst::bind),
        help("Pick another address with --listen or CATALYST_LISTEN.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("MCP transport failed: {message}")]
    #[diagnostic(code(catalyst::mcp))]
    Mcp { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingToken { .. } => exit_code::AUTH,
            Self::Validation { .. } | Self::Config(_) => exit_code::USAGE,
            Self::Bind { .. } => exit_code::CONNECTION,
            Self::Client { .. } | Self::Mcp { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingToken => Self::MissingToken {
                path: catalyst_config::config_path().display().to_string(),
            },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Figment(err) => Self::Config(err),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::Client {
            message: err.to_string(),
        }
    }
}
