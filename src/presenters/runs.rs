//! Pipeline run presenters.

use crate::error::RenderError;
use crate::presenters::format::{opt_timestamp, timestamp};
use crate::render::{Layout, Presenter, Renderable, Style, TableSpec, ToRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunPresenter {
    pub dot_id: String,
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunPresenter {
    pub id: String,
    #[serde(default)]
    pub state: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub outputs: Vec<Option<serde_json::Value>>,
    #[serde(default)]
    pub errors: Vec<Option<String>>,
    #[serde(default)]
    pub task_runs: Vec<TaskRunPresenter>,
}

/// Summary row of a run; listings show only this, `show` adds the task runs.
impl ToRow for PipelineRunPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        let errors: Vec<&str> = self.errors.iter().flatten().map(String::as_str).collect();
        Ok(vec![
            self.id.clone(),
            self.state.clone(),
            timestamp(&self.created_at),
            opt_timestamp(self.finished_at.as_ref()),
            errors.join("\n"),
        ])
    }
}

impl Presenter for PipelineRunPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: None,
        headers: &["ID", "State", "Created At", "Finished At", "Errors"],
        style: Style::Grid { merge: &[] },
    };
}

impl Renderable for PipelineRunPresenter {
    fn to_json(&self) -> Result<serde_json::Value, RenderError> {
        Ok(serde_json::to_value(self)?)
    }

    fn layout(&self) -> Layout<'_> {
        Layout::PipelineRun(self)
    }
}
