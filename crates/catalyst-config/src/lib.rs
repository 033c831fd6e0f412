//! Configuration for the catalyst gateway.
//!
//! Layered loading (defaults, optional TOML file, `CATALYST_*` environment)
//! and translation to `catalyst_core::GatewayConfig`. The token is required;
//! loading fails before anything is served when it is missing.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use catalyst_core::{DEFAULT_BASE_URL, GatewayConfig, TlsVerification};

/// Prefix shared by every environment variable we read.
pub const ENV_PREFIX: &str = "CATALYST_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CATALYST_API_TOKEN environment variable is required")]
    MissingToken,

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

/// Everything the gateway can be configured with.
///
/// Keys map one-to-one onto `CATALYST_<KEY>` environment variables and onto
/// top-level keys of the TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Intent API root.
    #[serde(default = "default_base_url")]
    pub api_base_url: String,

    /// Sent as `X-Auth-Token`.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Skip TLS certificate verification.
    #[serde(default)]
    pub insecure: bool,

    /// Extra CA certificate (PEM).
    #[serde(default)]
    pub ca_cert: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Pause after a 429, in milliseconds.
    #[serde(default = "default_rate_limit_delay_ms")]
    pub rate_limit_delay_ms: u64,

    /// Bind address for the HTTP surface.
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            api_token: None,
            insecure: false,
            ca_cert: None,
            timeout: default_timeout(),
            rate_limit_delay_ms: default_rate_limit_delay_ms(),
            listen: default_listen(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_rate_limit_delay_ms() -> u64 {
    1000
}
fn default_listen() -> String {
    "0.0.0.0:8000".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the default config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "catalyst", "catalyst").map_or_else(
        || PathBuf::from(".catalyst.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load settings from defaults, the TOML file (explicit `path` or the
/// default location; a missing file is skipped), then the environment.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = path.map_or_else(config_path, Path::to_path_buf);
    let settings = figment_for(&file).extract()?;
    Ok(settings)
}

fn figment_for(file: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed(ENV_PREFIX))
}

impl Settings {
    /// Validated socket address for the HTTP surface.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen.parse().map_err(|_| ConfigError::Validation {
            field: "listen".into(),
            reason: format!("expected host:port, got '{}'", self.listen),
        })
    }

    /// Build the runtime config. Fails when the token is absent or blank.
    pub fn to_gateway_config(&self) -> Result<GatewayConfig, ConfigError> {
        let token = self
            .api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let base_url: url::Url =
            self.api_base_url
                .parse()
                .map_err(|e: url::ParseError| ConfigError::Validation {
                    field: "api_base_url".into(),
                    reason: format!("{e}: {}", self.api_base_url),
                })?;

        let tls = if self.insecure {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(ref ca) = self.ca_cert {
            TlsVerification::CustomCa(ca.clone())
        } else {
            TlsVerification::SystemDefaults
        };

        let mut config = GatewayConfig::new(base_url, SecretString::from(token.to_owned()));
        config.tls = tls;
        config.timeout = Duration::from_secs(self.timeout);
        config.rate_limit_delay = Duration::from_millis(self.rate_limit_delay_ms);
        Ok(config)
    }
}
