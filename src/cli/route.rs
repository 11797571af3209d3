//! CLI route: single route table and run context.

use crate::cli::handlers;
use crate::cli::parse::Commands;
use crate::client::{
    AuthenticatedHttpClient, CookieAuthenticator, DiskCookieStore, HttpClient,
    SessionCookieAuthenticator, SessionRequest,
};
use crate::config::ShellConfig;
use crate::error::ApiError;
use crate::render::Renderer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Runtime context for one CLI invocation: the API client, the session
/// authenticator and the paging settings.
pub struct RunContext {
    client: Box<dyn HttpClient>,
    authenticator: Arc<dyn CookieAuthenticator>,
    page_size: usize,
    credentials_file: Option<PathBuf>,
}

impl RunContext {
    /// Build the HTTP stack from a validated configuration, keeping the session
    /// cookie in the user cache directory.
    pub fn new(config: &ShellConfig) -> Result<Self, ApiError> {
        config.ensure_valid()?;
        let opts = config.client_opts();

        let store = DiskCookieStore::default_location()?;
        let authenticator: Arc<dyn CookieAuthenticator> =
            Arc::new(SessionCookieAuthenticator::new(&opts, Box::new(store))?);

        let session = match config.admin_credentials_file.as_deref() {
            Some(path) => Some(SessionRequest::from_file(path)?),
            None => None,
        };
        let client = AuthenticatedHttpClient::new(&opts, Arc::clone(&authenticator), session)?;

        Ok(Self::with_parts(
            Box::new(client),
            authenticator,
            config.page_size,
            config.admin_credentials_file.clone(),
        ))
    }

    /// Assemble a context from already built parts.
    pub fn with_parts(
        client: Box<dyn HttpClient>,
        authenticator: Arc<dyn CookieAuthenticator>,
        page_size: usize,
        credentials_file: Option<PathBuf>,
    ) -> Self {
        Self {
            client,
            authenticator,
            page_size,
            credentials_file,
        }
    }

    pub(crate) fn client(&self) -> &dyn HttpClient {
        self.client.as_ref()
    }

    pub(crate) fn authenticator(&self) -> &dyn CookieAuthenticator {
        self.authenticator.as_ref()
    }

    pub(crate) fn credentials_file(&self) -> Option<&Path> {
        self.credentials_file.as_deref()
    }

    /// `path?page=N&size=S`, with pages counted from 1.
    pub(crate) fn page_path(&self, path: &str, page: usize) -> String {
        format!("{}?page={}&size={}", path, page.max(1), self.page_size)
    }

    /// Execute a CLI command via the single route table.
    pub async fn execute(
        &self,
        command: &Commands,
        renderer: &mut dyn Renderer,
    ) -> Result<(), ApiError> {
        let result = match command {
            Commands::Admin { command } => handlers::admin::handle(self, command, renderer).await,
            Commands::Node { command } => handlers::node::handle(self, command, renderer).await,
            Commands::Keys { command } => handlers::keys::handle(self, command, renderer).await,
            Commands::Chains { command } => {
                handlers::chains::handle_chains(self, command, renderer).await
            }
            Commands::Nodes { command } => {
                handlers::chains::handle_nodes(self, command, renderer).await
            }
            Commands::Jobs { command } => handlers::jobs::handle(self, command, renderer).await,
            Commands::Bridges { command } => {
                handlers::bridges::handle(self, command, renderer).await
            }
            Commands::Forwarders { command } => {
                handlers::forwarders::handle(self, command, renderer).await
            }
            Commands::Txs { command } => handlers::txs::handle(self, command, renderer).await,
            Commands::Attempts { command } => {
                handlers::txs::handle_attempts(self, command, renderer).await
            }
            Commands::Initiators { command } => {
                handlers::initiators::handle(self, command, renderer).await
            }
        };
        if let Err(e) = &result {
            warn!(error = %e, "command failed");
        }
        result
    }
}
