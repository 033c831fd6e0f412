// ── Automation tasks ──
//
// Task parameters arrive as a loose JSON object keyed by task type. Known
// task types are parsed into typed variants so a missing device id is
// rejected locally. Keys those variants do not model, and every key of an
// unknown task type, are forwarded untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{require, require_id};
use crate::error::CoreError;

/// Handle/status of a submitted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    pub task_id: Option<String>,
    pub status: Option<String>,
}

/// An automation request, keyed by task type.
///
/// Typed variants keep every key they do not model in `extra`, and
/// [`AutomationTask::params`] sends those back upstream unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum AutomationTask {
    /// `provision_device`
    ProvisionDevice {
        device_id: String,
        site_id: Option<String>,
        extra: Map<String, Value>,
    },
    /// `update_config`
    UpdateConfig {
        device_id: String,
        config: String,
        extra: Map<String, Value>,
    },
    /// Any task type without a typed schema yet.
    Other {
        task_type: String,
        params: Map<String, Value>,
    },
}

/// `{"taskType": ..., "params": {...}}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody<'a> {
    task_type: &'a str,
    params: Map<String, Value>,
}

impl AutomationTask {
    pub const PROVISION_DEVICE: &'static str = "provision_device";
    pub const UPDATE_CONFIG: &'static str = "update_config";

    /// Parse a task type plus loose parameters.
    pub fn from_parts(task_type: &str, mut params: Map<String, Value>) -> Result<Self, CoreError> {
        require("task_type", task_type)?;

        let task = match task_type {
            Self::PROVISION_DEVICE => {
                let device_id = required_string(&mut params, task_type, "device_id")?;
                // Non-string site ids stay in `extra` and go upstream untouched.
                let site_id = match params.remove("site_id") {
                    Some(Value::String(s)) => Some(s),
                    Some(other) => {
                        params.insert("site_id".into(), other);
                        None
                    }
                    None => None,
                };
                Self::ProvisionDevice {
                    device_id,
                    site_id,
                    extra: params,
                }
            }
            Self::UPDATE_CONFIG => {
                let device_id = required_string(&mut params, task_type, "device_id")?;
                let config = required_string(&mut params, task_type, "config")?;
                Self::UpdateConfig {
                    device_id,
                    config,
                    extra: params,
                }
            }
            other => Self::Other {
                task_type: other.to_owned(),
                params,
            },
        };
        task.validate()?;
        Ok(task)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::ProvisionDevice { device_id, .. } => require_id("device_id", device_id),
            Self::UpdateConfig {
                device_id, config, ..
            } => {
                require_id("device_id", device_id)?;
                require("config", config)
            }
            Self::Other { task_type, .. } => require("task_type", task_type),
        }
    }

    pub fn task_type(&self) -> &str {
        match self {
            Self::ProvisionDevice { .. } => Self::PROVISION_DEVICE,
            Self::UpdateConfig { .. } => Self::UPDATE_CONFIG,
            Self::Other { task_type, .. } => task_type,
        }
    }

    /// Parameters as sent upstream.
    pub fn params(&self) -> Map<String, Value> {
        match self {
            Self::ProvisionDevice {
                device_id,
                site_id,
                extra,
            } => {
                let mut map = extra.clone();
                map.insert("device_id".into(), Value::from(device_id.as_str()));
                if let Some(site) = site_id {
                    map.insert("site_id".into(), Value::from(site.as_str()));
                }
                map
            }
            Self::UpdateConfig {
                device_id,
                config,
                extra,
            } => {
                let mut map = extra.clone();
                map.insert("device_id".into(), Value::from(device_id.as_str()));
                map.insert("config".into(), Value::from(config.as_str()));
                map
            }
            Self::Other { params, .. } => params.clone(),
        }
    }

    pub fn upstream_body(&self) -> TaskBody<'_> {
        TaskBody {
            task_type: self.task_type(),
            params: self.params(),
        }
    }
}

fn required_string(
    params: &mut Map<String, Value>,
    task_type: &str,
    key: &str,
) -> Result<String, CoreError> {
    match params.remove(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(CoreError::validation(format!(
            "invalid params for {task_type}: {key} must be a string, got {other}"
        ))),
        None => Err(CoreError::validation(format!(
            "invalid params for {task_type}: missing {key}"
        ))),
    }
}
