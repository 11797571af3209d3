//! Key material presenters: one type per keystore family.

use crate::error::RenderError;
use crate::presenters::format::{boolean, optional, timestamp};
use crate::render::{Presenter, Style, TableSpec, ToRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthKeyPresenter {
    pub id: String,
    pub address: String,
    #[serde(rename = "evmChainID")]
    pub evm_chain_id: String,
    #[serde(default)]
    pub next_nonce: Option<i64>,
    #[serde(default)]
    pub eth_balance: Option<String>,
    #[serde(default)]
    pub link_balance: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub max_gas_price_wei: Option<String>,
}

impl ToRow for EthKeyPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.address.clone(),
            self.evm_chain_id.clone(),
            optional(self.next_nonce.as_ref()),
            optional(self.eth_balance.as_ref()),
            optional(self.link_balance.as_ref()),
            boolean(self.disabled),
            timestamp(&self.created_at),
            timestamp(&self.updated_at),
            optional(self.max_gas_price_wei.as_ref()),
        ])
    }
}

impl Presenter for EthKeyPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: Some("🔑 ETH Keys"),
        headers: &[
            "Address",
            "EVM Chain ID",
            "Next Nonce",
            "ETH",
            "LINK",
            "Disabled",
            "Created",
            "Updated",
            "Max Gas Price Wei",
        ],
        style: Style::List,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsaKeyPresenter {
    pub id: String,
    pub public_key: String,
    #[serde(default)]
    pub version: i32,
}

impl ToRow for CsaKeyPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![self.public_key.clone(), self.version.to_string()])
    }
}

impl Presenter for CsaKeyPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: Some("🔑 CSA Keys"),
        headers: &["Public Key", "Version"],
        style: Style::List,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrKeyBundlePresenter {
    pub id: String,
    pub on_chain_signing_address: String,
    pub off_chain_public_key: String,
    pub config_public_key: String,
}

impl ToRow for OcrKeyBundlePresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.id.clone(),
            self.on_chain_signing_address.clone(),
            self.off_chain_public_key.clone(),
            self.config_public_key.clone(),
        ])
    }
}

impl Presenter for OcrKeyBundlePresenter {
    const TABLE: TableSpec = TableSpec {
        banner: Some("🔑 OCR Keys"),
        headers: &[
            "ID",
            "On-chain signing addr",
            "Off-chain pubkey",
            "Config pubkey",
        ],
        style: Style::List,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ocr2KeyBundlePresenter {
    pub id: String,
    pub chain_type: String,
    pub onchain_public_key: String,
    pub offchain_public_key: String,
    pub config_public_key: String,
}

impl ToRow for Ocr2KeyBundlePresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.id.clone(),
            self.chain_type.clone(),
            self.onchain_public_key.clone(),
            self.offchain_public_key.clone(),
            self.config_public_key.clone(),
        ])
    }
}

impl Presenter for Ocr2KeyBundlePresenter {
    const TABLE: TableSpec = TableSpec {
        banner: Some("🔑 OCR2 Keys"),
        headers: &[
            "ID",
            "Type",
            "On-chain pubkey",
            "Off-chain pubkey",
            "Config pubkey",
        ],
        style: Style::List,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct P2PKeyPresenter {
    pub id: String,
    pub peer_id: String,
    pub public_key: String,
}

impl ToRow for P2PKeyPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.id.clone(),
            self.peer_id.clone(),
            self.public_key.clone(),
        ])
    }
}

impl Presenter for P2PKeyPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: Some("🔑 P2P Keys"),
        headers: &["ID", "Peer ID", "Public key"],
        style: Style::List,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrfKeyPresenter {
    pub id: String,
    pub compressed: String,
    pub uncompressed: String,
    pub hash: String,
}

impl ToRow for VrfKeyPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            self.compressed.clone(),
            self.uncompressed.clone(),
            self.hash.clone(),
        ])
    }
}

impl Presenter for VrfKeyPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: Some("🔑 VRF Keys"),
        headers: &["Compressed", "Uncompressed", "Hash"],
        style: Style::List,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolanaKeyPresenter {
    pub id: String,
    pub public_key: String,
}

impl ToRow for SolanaKeyPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![self.id.clone(), self.public_key.clone()])
    }
}

impl Presenter for SolanaKeyPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: Some("🔑 Solana Keys"),
        headers: &["ID", "Public key"],
        style: Style::List,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmosKeyPresenter {
    pub id: String,
    pub public_key: String,
}

impl ToRow for CosmosKeyPresenter {
    fn to_row(&self) -> Result<Vec<String>, RenderError> {
        Ok(vec![self.id.clone(), self.public_key.clone()])
    }
}

impl Presenter for CosmosKeyPresenter {
    const TABLE: TableSpec = TableSpec {
        banner: Some("🔑 Cosmos Keys"),
        headers: &["ID", "Public key"],
        style: Style::List,
    };
}
