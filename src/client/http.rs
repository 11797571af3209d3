//! HTTP transport to the node API, authenticated with a session cookie.

use crate::client::session::{CookieAuthenticator, SessionRequest};
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
    /// Raw `Set-Cookie` header values.
    pub set_cookies: Vec<String>,
}

/// Every request a command makes to the node goes through this trait.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ApiError>;

    async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::Get, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, ApiError> {
        self.request(Method::Post, path, Some(body)).await
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<ApiResponse, ApiError> {
        self.request(Method::Patch, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::Delete, path, None).await
    }
}

/// Connection options for the remote node.
#[derive(Debug, Clone)]
pub struct ClientOpts {
    pub remote_node_url: String,
    pub insecure_skip_verify: bool,
    pub request_timeout: Duration,
}

pub fn build_http_client(opts: &ClientOpts) -> Result<Client, ApiError> {
    if opts.insecure_skip_verify {
        warn!("insecure_skip_verify is on, skipping TLS certificate verification");
    }
    Client::builder()
        .danger_accept_invalid_certs(opts.insecure_skip_verify)
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(opts.request_timeout)
        .build()
        .map_err(|e| ApiError::Http(format!("Failed to create HTTP client: {}", e)))
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

pub(crate) async fn send(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<&Value>,
    cookie: Option<&str>,
) -> Result<ApiResponse, ApiError> {
    let mut request = client
        .request(method.as_reqwest(), url)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status().as_u16();
    let set_cookies = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect();
    let body = response.bytes().await?.to_vec();
    Ok(ApiResponse {
        status,
        body,
        set_cookies,
    })
}

/// Sends the stored session cookie with every request. On a 401, and only when
/// credentials are known, it logs in once and replays the request.
pub struct AuthenticatedHttpClient {
    client: Client,
    base_url: String,
    authenticator: Arc<dyn CookieAuthenticator>,
    session: Option<SessionRequest>,
}

impl AuthenticatedHttpClient {
    pub fn new(
        opts: &ClientOpts,
        authenticator: Arc<dyn CookieAuthenticator>,
        session: Option<SessionRequest>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_http_client(opts)?,
            base_url: opts.remote_node_url.clone(),
            authenticator,
            session,
        })
    }
}

#[async_trait]
impl HttpClient for AuthenticatedHttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ApiError> {
        let url = join_url(&self.base_url, path);
        let cookie = self.authenticator.cookie()?;
        debug!(?method, %url, "node API request");
        let response = send(&self.client, method, &url, body, cookie.as_deref()).await?;
        debug!(status = response.status, "node API response");

        let Some(session) = self.session.as_ref().filter(|s| !s.is_empty()) else {
            return Ok(response);
        };
        if response.status != 401 {
            return Ok(response);
        }

        debug!("session rejected, re-authenticating");
        match self.authenticator.authenticate(session).await {
            Ok(cookie) => send(&self.client, method, &url, body, Some(&cookie)).await,
            Err(e) => {
                warn!(error = %e, "re-authentication failed");
                Ok(response)
            }
        }
    }
}
