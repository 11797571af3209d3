//! Shared test utilities for integration tests
//!
//! A scripted in-memory `HttpClient`, a recording authenticator, helpers to run a
//! command line end to end, and serialized access to the environment.

use async_trait::async_trait;
use clap::Parser;
use nodectl::cli::{Cli, RunContext};
use nodectl::client::{
    ApiResponse, CookieAuthenticator, HttpClient, Method, SessionRequest,
};
use nodectl::error::ApiError;
use nodectl::render::{JsonRenderer, TableRenderer};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// A request seen by [`MockHttpClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Replays scripted responses in order and records every request.
#[derive(Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<VecDeque<ApiResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.responses.lock().push_back(ApiResponse {
            status,
            body: serde_json::to_vec(&body).unwrap(),
            set_cookies: Vec::new(),
        });
        self
    }

    pub fn respond_raw(&self, status: u16, body: &str) -> &Self {
        self.responses.lock().push_back(ApiResponse {
            status,
            body: body.as_bytes().to_vec(),
            set_cookies: Vec::new(),
        });
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ApiError> {
        self.requests.lock().push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| ApiError::Http(format!("no scripted response for {}", path)))
    }
}

/// Accepts any credentials and remembers who logged in.
#[derive(Default)]
pub struct MockAuthenticator {
    pub sessions: Mutex<Vec<SessionRequest>>,
    pub cookie: Mutex<Option<String>>,
}

#[async_trait]
impl CookieAuthenticator for MockAuthenticator {
    fn cookie(&self) -> Result<Option<String>, ApiError> {
        Ok(self.cookie.lock().clone())
    }

    async fn authenticate(&self, session: &SessionRequest) -> Result<String, ApiError> {
        self.sessions.lock().push(session.clone());
        let cookie = "clsession=test".to_string();
        *self.cookie.lock() = Some(cookie.clone());
        Ok(cookie)
    }

    fn logout(&self) -> Result<(), ApiError> {
        *self.cookie.lock() = None;
        Ok(())
    }
}

pub fn context(client: &MockHttpClient) -> RunContext {
    context_with(client, Arc::new(MockAuthenticator::default()), None)
}

pub fn context_with(
    client: &MockHttpClient,
    authenticator: Arc<MockAuthenticator>,
    credentials_file: Option<PathBuf>,
) -> RunContext {
    RunContext::with_parts(Box::new(client.clone()), authenticator, 25, credentials_file)
}

/// Parse `args` as a nodectl command line, execute it, and return the result with
/// everything written to stdout.
pub async fn run(ctx: &RunContext, args: &[&str]) -> (Result<(), ApiError>, String) {
    let cli = Cli::try_parse_from(std::iter::once("nodectl").chain(args.iter().copied()))
        .expect("command line should parse");
    if cli.json {
        let mut renderer = JsonRenderer::new(Vec::new());
        let result = ctx.execute(&cli.command, &mut renderer).await;
        (result, String::from_utf8(renderer.into_inner()).unwrap())
    } else {
        let mut renderer = TableRenderer::new(Vec::new());
        let result = ctx.execute(&cli.command, &mut renderer).await;
        (result, String::from_utf8(renderer.into_inner()).unwrap())
    }
}

/// One JSON:API resource object.
pub fn resource(kind: &str, id: &str, attributes: Value) -> Value {
    json!({ "type": kind, "id": id, "attributes": attributes })
}

pub fn document(data: Value) -> Value {
    json!({ "data": data })
}

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

const ISOLATED_VARS: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "NODECTL__REMOTE_NODE_URL",
    "NODECTL__PAGE_SIZE",
];

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir` and the
/// `NODECTL__*` variables used by the tests cleared, restoring everything after.
pub fn with_config_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(&str, Option<String>)> = ISOLATED_VARS
        .iter()
        .map(|name| (*name, std::env::var(name).ok()))
        .collect();

    let home = test_dir.path().join("home");
    let config_home = test_dir.path().join("config");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&config_home).unwrap();
    for name in ISOLATED_VARS {
        std::env::remove_var(name);
    }
    std::env::set_var("HOME", &home);
    std::env::set_var("XDG_CONFIG_HOME", &config_home);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for (name, value) in saved {
        match value {
            Some(value) => std::env::set_var(name, value),
            None => std::env::remove_var(name),
        }
    }

    match result {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
