// ── Schema layer ──
//
// Projections of upstream records (outputs) and the validated inputs the
// surfaces accept. Output field names are part of the wire contract of
// both surfaces.

pub mod credential;
pub mod device;
pub mod endpoint;
pub mod profiling;
pub mod site;
pub mod task;

pub use credential::DeviceCredential;
pub use device::{Device, DeviceDetail};
pub use endpoint::{Endpoint, EndpointFilter};
pub use profiling::ProfilingRule;
pub use site::{Site, SiteCreateRequest};
pub use task::{AutomationTask, TaskResult};

use crate::error::CoreError;

/// Reject blank required strings.
pub(crate) fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Identifiers are spliced into upstream paths, so they must be a single
/// path segment.
pub(crate) fn require_id(field: &str, value: &str) -> Result<(), CoreError> {
    require(field, value)?;
    if value.contains(['/', '?', '#']) {
        return Err(CoreError::validation(format!(
            "{field} must not contain '/', '?' or '#'"
        )));
    }
    Ok(())
}
