//! EVM forwarder presenters.

use crate::error::RenderError;
use crate::presenters::format::timestamp;
use crate::render::{Presenter, Style, TableSpec, ToRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwarderPresenter {
    pub id: String,
    pub address: String,
    #[serde(rename = "evmChainId")]
    pub evm_chain_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ToRow for ForwarderPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.id.clone(),
            self.address.clone(),
            self.evm_chain_id.clone(),
            timestamp(&self.created_at),
        ])
    }
}

impl Presenter for ForwarderPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: None,
        headers: &["ID", "Address", "Chain ID", "Created At"],
        style: Style::List,
    };
}
