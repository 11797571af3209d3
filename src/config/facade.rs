//! Config loader: assembles the layered sources and deserializes the result.

use super::merge::builder_with_defaults;
use super::sources::{environment, explicit_file, global_file};
use super::ShellConfig;
use crate::error::ApiError;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global file, then `explicit` when given, then environment.
    pub fn load(explicit: Option<&Path>) -> Result<ShellConfig, ApiError> {
        let mut builder = global_file::add_to_builder(builder_with_defaults()?)?;
        if let Some(path) = explicit {
            builder = explicit_file::add_to_builder(builder, path)?;
        }
        let builder = environment::add_to_builder(builder);

        let config: ShellConfig = builder.build()?.try_deserialize()?;
        debug!(remote_node_url = %config.remote_node_url, "configuration loaded");
        Ok(config)
    }
}
