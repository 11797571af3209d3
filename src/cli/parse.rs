//! CLI parse: clap types for nodectl. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// nodectl - administrative shell for an oracle node
#[derive(Debug, Parser)]
#[command(name = "nodectl", version)]
#[command(about = "Manage a running oracle node over its REST API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the node API (overrides config)
    #[arg(long, global = true)]
    pub remote_node_url: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, global = true)]
    pub insecure_skip_verify: bool,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file path (layered over the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sessions and node log levels
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
    /// Node configuration and health
    Node {
        #[command(subcommand)]
        command: NodeCommands,
    },
    /// Manage key material
    Keys {
        #[command(subcommand)]
        command: KeyCommands,
    },
    /// Configured chains
    Chains {
        #[command(subcommand)]
        command: ChainCommands,
    },
    /// RPC nodes of configured chains
    Nodes {
        #[command(subcommand)]
        command: NodeListCommands,
    },
    /// Jobs and job runs
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// External adapter bridges
    Bridges {
        #[command(subcommand)]
        command: BridgeCommands,
    },
    /// EVM forwarder contracts
    Forwarders {
        #[command(subcommand)]
        command: ForwarderCommands,
    },
    /// Transactions and transfers
    Txs {
        #[command(subcommand)]
        command: TxCommands,
    },
    /// EVM transaction attempts
    Attempts {
        #[command(subcommand)]
        command: AttemptCommands,
    },
    /// External initiators
    Initiators {
        #[command(subcommand)]
        command: InitiatorCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCommands {
    /// Log in and store the session cookie
    Login {
        /// Two-line credentials file (email, password)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// End the session and forget the cookie
    Logout,
    /// Change the password of the logged-in user
    Chpass {
        /// File whose first line is the current password
        #[arg(long)]
        old_password_file: Option<PathBuf>,
        /// File whose first line is the new password
        #[arg(long)]
        new_password_file: Option<PathBuf>,
    },
    /// Node log levels
    Logs {
        #[command(subcommand)]
        command: LogCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum LogCommands {
    /// Show the global and per-service log levels
    Get,
    /// Change the global log level
    SetLevel {
        /// debug, info, warn, error, crit, panic or fatal
        level: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum NodeCommands {
    /// Print the effective node configuration (TOML)
    Config,
    /// Show health checks
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyKind {
    Eth,
    Csa,
    Ocr,
    Ocr2,
    P2p,
    Vrf,
    Solana,
    Cosmos,
}

impl KeyKind {
    /// Path segment under `/v2/keys`.
    pub fn path_segment(self) -> &'static str {
        match self {
            KeyKind::Eth => "eth",
            KeyKind::Csa => "csa",
            KeyKind::Ocr => "ocr",
            KeyKind::Ocr2 => "ocr2",
            KeyKind::P2p => "p2p",
            KeyKind::Vrf => "vrf",
            KeyKind::Solana => "solana",
            KeyKind::Cosmos => "cosmos",
        }
    }

    /// Display name used in command headers.
    pub fn label(self) -> &'static str {
        match self {
            KeyKind::Eth => "ETH",
            KeyKind::Csa => "CSA",
            KeyKind::Ocr => "OCR",
            KeyKind::Ocr2 => "OCR2",
            KeyKind::P2p => "P2P",
            KeyKind::Vrf => "VRF",
            KeyKind::Solana => "Solana",
            KeyKind::Cosmos => "Cosmos",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum KeyCommands {
    /// List keys of one kind
    List {
        #[arg(value_enum)]
        kind: KeyKind,
    },
    /// Create a key
    Create {
        #[arg(value_enum)]
        kind: KeyKind,
        /// Chain the ETH key is enabled for
        #[arg(long)]
        evm_chain_id: Option<String>,
        /// Chain family for OCR2 bundles (evm, solana, cosmos, starknet)
        #[arg(long)]
        chain_type: Option<String>,
    },
    /// Delete a key
    Delete {
        #[arg(value_enum)]
        kind: KeyKind,
        /// Key id (address for ETH keys)
        id: String,
        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },
    /// Import an encrypted key file
    Import {
        #[arg(value_enum)]
        kind: KeyKind,
        /// Encrypted key JSON
        file: PathBuf,
        /// File whose first line is the password the key is encrypted with
        #[arg(long)]
        old_password_file: PathBuf,
        /// Chain the imported ETH key is enabled for
        #[arg(long)]
        evm_chain_id: Option<String>,
    },
    /// Export a key as an encrypted key file
    Export {
        #[arg(value_enum)]
        kind: KeyKind,
        /// Key id (address for ETH keys)
        id: String,
        /// File whose first line is the password to encrypt the export with
        #[arg(long)]
        new_password_file: PathBuf,
        /// Where to write the key JSON
        #[arg(long, short)]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Network {
    Evm,
    Solana,
    Cosmos,
}

impl Network {
    pub fn path_segment(self) -> &'static str {
        match self {
            Network::Evm => "evm",
            Network::Solana => "solana",
            Network::Cosmos => "cosmos",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ChainCommands {
    /// List chains of a network
    List {
        #[arg(value_enum)]
        network: Network,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Debug, Subcommand)]
pub enum NodeListCommands {
    /// List RPC nodes of a network
    List {
        #[arg(value_enum)]
        network: Network,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Debug, Subcommand)]
pub enum JobCommands {
    /// List jobs
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one job
    Show { id: String },
    /// Create a job from a TOML job spec file
    Create { file: PathBuf },
    /// Delete a job
    Delete {
        id: String,
        #[arg(long, short)]
        yes: bool,
    },
    /// Trigger a run of a web job
    Run { id: String },
    /// Pipeline runs
    Runs {
        #[command(subcommand)]
        command: RunCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum RunCommands {
    /// List pipeline runs, newest first
    List {
        /// Only runs of this job
        #[arg(long)]
        job_id: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one run with its task results
    Show { job_id: String, run_id: String },
    /// Cancel an in-progress run
    Cancel {
        run_id: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum BridgeCommands {
    /// List bridges
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one bridge
    Show { name: String },
    /// Create a bridge
    Create {
        name: String,
        url: String,
        #[arg(long, default_value_t = 0)]
        confirmations: u32,
        #[arg(long)]
        minimum_contract_payment: Option<String>,
    },
    /// Delete a bridge
    Destroy {
        name: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ForwarderCommands {
    /// List forwarders
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Start tracking a forwarder contract
    Track {
        address: String,
        #[arg(long)]
        evm_chain_id: String,
    },
    /// Stop tracking a forwarder
    Delete {
        id: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TxCommands {
    /// EVM transactions
    Evm {
        #[command(subcommand)]
        command: EvmTxCommands,
    },
    /// Send SOL
    Solana {
        #[command(subcommand)]
        command: TransferCommands,
    },
    /// Send Cosmos tokens
    Cosmos {
        #[command(subcommand)]
        command: TransferCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum EvmTxCommands {
    /// List transactions
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show a transaction by hash
    Show { hash: String },
    /// Send ETH from a node key
    Create {
        amount: String,
        from: String,
        to: String,
        #[arg(long)]
        evm_chain_id: Option<String>,
        /// Allow sending more than the key's balance minus fees
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TransferCommands {
    /// Transfer funds from a node key
    Create {
        amount: String,
        from: String,
        to: String,
        #[arg(long)]
        chain_id: String,
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AttemptCommands {
    /// List EVM transaction attempts
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Debug, Subcommand)]
pub enum InitiatorCommands {
    /// List external initiators
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Create an external initiator and print its credentials
    Create { name: String, url: Option<String> },
    /// Delete an external initiator
    Destroy {
        name: String,
        #[arg(long, short)]
        yes: bool,
    },
}
