//! Service log level presenter.

use crate::error::RenderError;
use crate::render::{Layout, Renderable};
use serde::{Deserialize, Serialize};

/// Per-service log levels; `service_name[i]` runs at `log_level[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogLevelsPresenter {
    #[serde(default)]
    pub service_name: Vec<String>,
    #[serde(default)]
    pub log_level: Vec<String>,
    pub default_log_level: String,
}

impl Renderable for LogLevelsPresenter {
    fn to_json(&self) -> Result<serde_json::Value, RenderError> {
        Ok(serde_json::to_value(self)?)
    }

    fn layout(&self) -> Layout<'_> {
        Layout::LogLevels(self)
    }
}
