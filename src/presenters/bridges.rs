//! Bridge presenters.

use crate::error::RenderError;
use crate::presenters::format::optional;
use crate::render::{Presenter, Style, TableSpec, ToRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgePresenter {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub confirmations: u32,
    #[serde(default)]
    pub outgoing_token: String,
    #[serde(default)]
    pub minimum_contract_payment: Option<String>,
}

impl ToRow for BridgePresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.name.clone(),
            self.url.clone(),
            self.confirmations.to_string(),
            self.outgoing_token.clone(),
            optional(self.minimum_contract_payment.as_ref()),
        ])
    }
}

impl Presenter for BridgePresenter {
    const TABLE: TableSpec = TableSpec {
        banner: None,
        headers: &[
            "Name",
            "URL",
            "Default Confirmations",
            "Outgoing Token",
            "Minimum Payment",
        ],
        style: Style::List,
    };
}

/// Returned once, on creation: the only time the incoming token is visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeCreatedPresenter {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub confirmations: u32,
    pub incoming_token: String,
    pub outgoing_token: String,
}

impl ToRow for BridgeCreatedPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.name.clone(),
            self.url.clone(),
            self.confirmations.to_string(),
            self.incoming_token.clone(),
            self.outgoing_token.clone(),
        ])
    }
}

impl Presenter for BridgeCreatedPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: None,
        headers: &[
            "Name",
            "URL",
            "Default Confirmations",
            "Incoming Token",
            "Outgoing Token",
        ],
        style: Style::List,
    };
}
