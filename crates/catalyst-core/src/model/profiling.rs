// ── Profiling rule ──

use serde::{Deserialize, Serialize};

use super::require;
use crate::error::CoreError;

/// Input for `POST /endpoint-analytics/profiling-rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilingRule {
    pub rule_id: String,
    #[serde(default = "default_rule_type")]
    pub rule_type: String,
}

fn default_rule_type() -> String {
    "Custom Rule".into()
}

impl ProfilingRule {
    pub fn validate(&self) -> Result<(), CoreError> {
        require("ruleId", &self.rule_id)
    }
}
