//! Merge rules: defaults under every other source.

use crate::config::{DEFAULT_PAGE_SIZE, DEFAULT_REMOTE_NODE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("remote_node_url", DEFAULT_REMOTE_NODE_URL)?
        .set_default("insecure_skip_verify", false)?
        .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
        .set_default("page_size", DEFAULT_PAGE_SIZE as i64)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
