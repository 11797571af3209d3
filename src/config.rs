//! Configuration System
//!
//! Layered shell configuration: built-in defaults, the global config file, an explicit
//! `--config` file and `NODECTL__*` environment variables, in increasing precedence.
//! CLI flags are applied on top by the binary.

use crate::client::ClientOpts;
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

pub const DEFAULT_REMOTE_NODE_URL: &str = "http://localhost:6688";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Base URL of the node's REST API
    #[serde(default = "default_remote_node_url")]
    pub remote_node_url: String,

    /// Accept self-signed TLS certificates
    #[serde(default)]
    pub insecure_skip_verify: bool,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Page size for list commands
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Two-line file (email, password) used to log in and to refresh expired sessions
    #[serde(default)]
    pub admin_credentials_file: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_remote_node_url() -> String {
    DEFAULT_REMOTE_NODE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            remote_node_url: default_remote_node_url(),
            insecure_skip_verify: false,
            request_timeout_secs: default_request_timeout_secs(),
            page_size: default_page_size(),
            admin_credentials_file: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("remote_node_url '{0}' is not a valid URL: {1}")]
    InvalidUrl(String, String),

    #[error("remote_node_url '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("page_size must be greater than zero")]
    ZeroPageSize,

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

impl ShellConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        match Url::parse(&self.remote_node_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(_) => errors.push(ValidationError::UnsupportedScheme(
                self.remote_node_url.clone(),
            )),
            Err(e) => errors.push(ValidationError::InvalidUrl(
                self.remote_node_url.clone(),
                e.to_string(),
            )),
        }
        if self.page_size == 0 {
            errors.push(ValidationError::ZeroPageSize);
        }
        if self.request_timeout_secs == 0 {
            errors.push(ValidationError::ZeroTimeout);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold every problem into one configuration error.
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn client_opts(&self) -> ClientOpts {
        ClientOpts {
            remote_node_url: self.remote_node_url.clone(),
            insecure_skip_verify: self.insecure_skip_verify,
            request_timeout: self.request_timeout(),
        }
    }
}
