//! nodectl: administrative shell for an oracle node
//!
//! Issues REST calls against a running node, decodes the JSON:API responses into
//! presenters and renders them as pretty JSON or aligned text tables.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod presenters;
pub mod render;
