//! External initiator presenters.

use crate::error::RenderError;
use crate::presenters::format::{optional, timestamp};
use crate::render::{Layout, Presenter, Renderable, Style, TableSpec, ToRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalInitiatorPresenter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    pub access_key: String,
    #[serde(default)]
    pub outgoing_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ToRow for ExternalInitiatorPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.id.clone(),
            self.name.clone(),
            optional(self.url.as_ref()),
            self.access_key.clone(),
            self.outgoing_token.clone(),
            timestamp(&self.created_at),
            timestamp(&self.updated_at),
        ])
    }
}

impl Presenter for ExternalInitiatorPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: None,
        headers: &[
            "ID",
            "Name",
            "URL",
            "Access Key",
            "Outgoing Token",
            "Created",
            "Updated",
        ],
        style: Style::Grid { merge: &[] },
    };
}

/// Credentials issued when an external initiator is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalInitiatorAuthentication {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    pub access_key: String,
    pub secret: String,
    pub outgoing_token: String,
    pub outgoing_secret: String,
}

impl Renderable for ExternalInitiatorAuthentication {
    fn to_json(&self) -> Result<serde_json::Value, RenderError> {
        Ok(serde_json::to_value(self)?)
    }

    fn layout(&self) -> Layout<'_> {
        Layout::ExternalInitiatorAuth(self)
    }
}
