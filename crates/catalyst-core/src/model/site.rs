// ── Site ──

use serde::{Deserialize, Serialize};

use super::require;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Input for `POST /sites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCreateRequest {
    /// Slash-separated path, e.g. `Global/Area1`.
    pub site_name_hierarchy: String,
    #[serde(default = "default_site_type")]
    pub site_type: String,
}

fn default_site_type() -> String {
    "FABRIC_SITE".into()
}

impl SiteCreateRequest {
    pub fn new(site_name_hierarchy: impl Into<String>) -> Self {
        Self {
            site_name_hierarchy: site_name_hierarchy.into(),
            site_type: default_site_type(),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        require("siteNameHierarchy", &self.site_name_hierarchy)?;
        require("siteType", &self.site_type)
    }

    /// The upstream expects a list of sites even for a single create.
    pub fn upstream_body(&self) -> &[Self] {
        std::slice::from_ref(self)
    }
}
