//! Chain and chain-node presenters, shared by every network family.

use crate::error::RenderError;
use crate::presenters::format::boolean;
use crate::render::{Presenter, Style, TableSpec, ToRow};
use serde::{Deserialize, Serialize};

/// A configured chain. The config is the node's TOML fragment, shown verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainPresenter {
    pub id: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub config: String,
}

impl ToRow for ChainPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.id.clone(),
            boolean(self.enabled),
            self.config.clone(),
        ])
    }
}

impl Presenter for ChainPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: None,
        headers: &["ID", "Enabled", "Config"],
        style: Style::List,
    };
}

/// An RPC node attached to a chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePresenter {
    pub id: String,
    pub name: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub config: String,
}

impl ToRow for NodePresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.name.clone(),
            self.chain_id.clone(),
            self.state.clone(),
            self.config.clone(),
        ])
    }
}

impl Presenter for NodePresenter {
    const TABLE: TableSpec = TableSpec {
        banner: None,
        headers: &["Name", "Chain ID", "State", "Config"],
        style: Style::List,
    };
}
