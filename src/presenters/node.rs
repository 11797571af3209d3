//! Node-wide views: effective configuration and health checks.

use crate::error::RenderError;
use crate::render::{Layout, Presenter, RenderTable, Renderable, Style, TableSpec, ToRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Effective node configuration as TOML text, printed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigPresenter {
    pub config: String,
}

impl RenderTable for ConfigPresenter {
    fn render_table(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        out.write_all(self.config.as_bytes())?;
        if !self.config.ends_with('\n') {
            writeln!(out)?;
        }
        Ok(())
    }
}

impl Renderable for ConfigPresenter {
    fn to_json(&self) -> Result<serde_json::Value, RenderError> {
        Ok(serde_json::to_value(self)?)
    }

    fn layout(&self) -> Layout<'_> {
        Layout::Table(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckPresenter {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub output: String,
}

impl ToRow for HealthCheckPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.name.clone(),
            self.status.clone(),
            self.output.clone(),
        ])
    }
}

impl Presenter for HealthCheckPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: None,
        headers: &["Name", "Status", "Output"],
        style: Style::Grid { merge: &[] },
    };
}
