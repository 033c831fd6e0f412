// Automation task endpoint

use serde::Serialize;
use tracing::debug;

use crate::client::CatalystClient;
use crate::error::Error;
use crate::models::{ApiTask, TaskAnswer};

impl CatalystClient {
    /// Submit an automation task and return its handle.
    ///
    /// `POST /task` with `{"taskType": ..., "params": {...}}`
    pub async fn run_task<B: Serialize + ?Sized + Sync>(&self, body: &B) -> Result<ApiTask, Error> {
        debug!("submitting automation task");
        let answer: TaskAnswer = self.post("task", body).await?;
        Ok(answer.into_task())
    }
}
