// Endpoint analytics endpoints
//
// Profiling rules and the endpoint counter. Responses pass through
// untouched; their shape varies between releases.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{CatalystClient, Query};
use crate::error::Error;

impl CatalystClient {
    /// Fetch one profiling rule.
    ///
    /// `GET /endpoint-analytics/profiling-rules/{ruleId}`
    pub async fn get_profiling_rule(&self, rule_id: &str) -> Result<Value, Error> {
        debug!(rule_id, "fetching profiling rule");
        self.get(&format!("endpoint-analytics/profiling-rules/{rule_id}"), None)
            .await
    }

    /// Create a profiling rule.
    ///
    /// `POST /endpoint-analytics/profiling-rules`
    pub async fn create_profiling_rule<B: Serialize + ?Sized + Sync>(
        &self,
        body: &B,
    ) -> Result<Value, Error> {
        debug!("creating profiling rule");
        self.post("endpoint-analytics/profiling-rules", body).await
    }

    /// Count endpoints matching the given filter pairs. An empty slice
    /// sends no query string.
    ///
    /// `GET /endpoint-analytics/endpoints/count`
    pub async fn count_endpoints(&self, filter: &Query<'_>) -> Result<Value, Error> {
        debug!(?filter, "counting endpoints");
        let query = (!filter.is_empty()).then_some(filter);
        self.get("endpoint-analytics/endpoints/count", query).await
    }
}
