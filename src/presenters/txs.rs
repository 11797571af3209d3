//! Transaction presenters: EVM transactions and attempts, plus non-EVM transfer messages.

use crate::error::RenderError;
use crate::presenters::format::{opt_timestamp, optional};
use crate::render::{Presenter, Style, TableSpec, ToRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthTxPresenter {
    pub id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub nonce: Option<String>,
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub gas_limit: Option<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(rename = "evmChainID", default)]
    pub evm_chain_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ToRow for EthTxPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.hash.clone(),
            optional(self.nonce.as_ref()),
            self.from.clone(),
            self.to.clone(),
            self.value.clone(),
            optional(self.sent_at.as_ref()),
            self.state.clone(),
        ])
    }
}

impl Presenter for EthTxPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: None,
        headers: &["Hash", "Nonce", "From", "To", "Value", "Sent At", "State"],
        style: Style::Grid { merge: &[] },
    };
}

/// Result of a Solana or Cosmos transfer submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgPresenter {
    pub id: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub from: String,
    pub to: String,
    pub amount: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ToRow for MsgPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.chain_id.clone(),
            self.from.clone(),
            self.to.clone(),
            self.amount.clone(),
            opt_timestamp(self.created_at.as_ref()),
        ])
    }
}

impl Presenter for MsgPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: None,
        headers: &["Chain ID", "From", "To", "Amount", "Created At"],
        style: Style::List,
    };
}
