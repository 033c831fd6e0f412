// ── Runtime connection configuration ──
//
// Describes how to reach Catalyst Center. Carries the token and transport
// tuning but never touches disk; `catalyst-config` builds one of these and
// hands it in.

use std::path::PathBuf;
use std::time::Duration;

use catalyst_api::{TlsMode, TransportConfig};
use secrecy::SecretString;
use url::Url;

/// Public DevNet always-on sandbox.
pub const DEFAULT_BASE_URL: &str = "https://sandboxdnac.cisco.com/dna/intent/api/v1";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Additional CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification. Only when explicitly requested.
    DangerAcceptInvalid,
}

/// Configuration for talking to one Catalyst Center instance.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Intent API root, e.g. `https://dnac.example.com/dna/intent/api/v1`.
    pub base_url: Url,
    /// Value sent as `X-Auth-Token`.
    pub token: SecretString,
    pub tls: TlsVerification,
    /// Per-request timeout, applied to every upstream call.
    pub timeout: Duration,
    /// Pause after a 429 before the error is reported.
    pub rate_limit_delay: Duration,
}

impl GatewayConfig {
    /// Config with default transport settings.
    pub fn new(base_url: Url, token: SecretString) -> Self {
        let transport = TransportConfig::default();
        Self {
            base_url,
            token,
            tls: TlsVerification::default(),
            timeout: transport.timeout,
            rate_limit_delay: transport.rate_limit_delay,
        }
    }

    /// Translate into the api crate's transport settings.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
            rate_limit_delay: self.rate_limit_delay,
        }
    }
}
