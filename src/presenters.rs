//! Presenters: read-only projections of node API resources.

pub mod format;

mod bridges;
mod chains;
mod forwarders;
mod initiators;
mod jobs;
mod keys;
mod logs;
mod node;
mod runs;
mod txs;

pub use bridges::{BridgeCreatedPresenter, BridgePresenter};
pub use chains::{ChainPresenter, NodePresenter};
pub use forwarders::ForwarderPresenter;
pub use initiators::{ExternalInitiatorAuthentication, ExternalInitiatorPresenter};
pub use jobs::{JobPresenter, PipelineSpec};
pub use keys::{
    CosmosKeyPresenter, CsaKeyPresenter, EthKeyPresenter, Ocr2KeyBundlePresenter,
    OcrKeyBundlePresenter, P2PKeyPresenter, SolanaKeyPresenter, VrfKeyPresenter,
};
pub use logs::LogLevelsPresenter;
pub use node::{ConfigPresenter, HealthCheckPresenter};
pub use runs::{PipelineRunPresenter, TaskRunPresenter};
pub use txs::{EthTxPresenter, MsgPresenter};
