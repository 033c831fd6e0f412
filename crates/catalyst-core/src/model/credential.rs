// ── Device credential ──

use std::fmt;

use serde::{Deserialize, Serialize};

use super::require;
use crate::error::CoreError;

/// CLI credential input for `POST /device-credentials`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCredential {
    pub description: String,
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_password: Option<String>,
}

// Passwords stay out of logs.
impl fmt::Debug for DeviceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceCredential")
            .field("description", &self.description)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field(
                "enable_password",
                &self.enable_password.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// `{"settings": {"cliCredential": [...]}}`
#[derive(Debug, Serialize)]
pub struct CredentialSettings<'a> {
    settings: CliCredentials<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CliCredentials<'a> {
    cli_credential: &'a [DeviceCredential],
}

impl DeviceCredential {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("description", &self.description)?;
        require("username", &self.username)?;
        require("password", &self.password)
    }

    pub fn upstream_body(&self) -> CredentialSettings<'_> {
        CredentialSettings {
            settings: CliCredentials {
                cli_credential: std::slice::from_ref(self),
            },
        }
    }
}
