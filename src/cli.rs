//! CLI domain: parse, route, handlers and output only.
//! A single route table dispatches each command to its handler.

mod handlers;
mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{
    AdminCommands, AttemptCommands, BridgeCommands, ChainCommands, Cli, Commands,
    EvmTxCommands, ForwarderCommands, InitiatorCommands, JobCommands, KeyCommands, KeyKind,
    LogCommands, Network, NodeCommands, NodeListCommands, TransferCommands, TxCommands,
};
pub use route::RunContext;
