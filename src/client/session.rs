//! Session credentials, cookie storage and cookie-based authentication.

use crate::client::http::{build_http_client, join_url, send, ClientOpts, Method};
use crate::client::jsonapi::parse_response;
use crate::error::ApiError;
use async_trait::async_trait;
use directories::ProjectDirs;
use parking_lot::Mutex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the cookie carrying the node session id.
pub const SESSION_COOKIE_NAME: &str = "clsession";

/// Login credentials for the node's operator UI account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SessionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SessionRequest {
    /// Read credentials from a file holding the email on the first line and the
    /// password on the second.
    pub fn from_file(path: &Path) -> Result<Self, ApiError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ApiError::Session(format!(
                "failed to read credentials file {}: {}",
                path.display(),
                e
            ))
        })?;
        let mut lines = contents.lines().map(str::trim).filter(|l| !l.is_empty());
        match (lines.next(), lines.next()) {
            (Some(email), Some(password)) => Ok(Self {
                email: email.to_string(),
                password: password.to_string(),
            }),
            _ => Err(ApiError::Session(format!(
                "credentials file {} must contain an email and a password line",
                path.display()
            ))),
        }
    }

    /// True when neither an email nor a password is known.
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

/// A place to keep the single session cookie between invocations.
pub trait CookieStore: Send + Sync {
    fn save(&self, cookie: &str) -> Result<(), ApiError>;
    fn retrieve(&self) -> Result<Option<String>, ApiError>;
    fn reset(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    cookie: Mutex<Option<String>>,
}

impl CookieStore for MemoryCookieStore {
    fn save(&self, cookie: &str) -> Result<(), ApiError> {
        *self.cookie.lock() = Some(cookie.to_string());
        Ok(())
    }

    fn retrieve(&self) -> Result<Option<String>, ApiError> {
        Ok(self.cookie.lock().clone())
    }

    fn reset(&self) -> Result<(), ApiError> {
        *self.cookie.lock() = None;
        Ok(())
    }
}

/// Keeps the cookie in `<dir>/cookie`, readable by the owner only.
#[derive(Debug, Clone)]
pub struct DiskCookieStore {
    dir: PathBuf,
}

impl DiskCookieStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The per-user cache directory for nodectl.
    pub fn default_location() -> Result<Self, ApiError> {
        let dirs = ProjectDirs::from("", "", "nodectl").ok_or_else(|| {
            ApiError::Config("could not determine the user cache directory".to_string())
        })?;
        Ok(Self::new(dirs.cache_dir()))
    }

    pub fn cookie_path(&self) -> PathBuf {
        self.dir.join("cookie")
    }

    fn write(&self, contents: &str) -> Result<(), ApiError> {
        std::fs::create_dir_all(&self.dir)?;
        let mut options = std::fs::OpenOptions::new();
        options.create(true).write(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(self.cookie_path())?;
        std::io::Write::write_all(&mut file, contents.as_bytes())?;
        Ok(())
    }
}

impl CookieStore for DiskCookieStore {
    fn save(&self, cookie: &str) -> Result<(), ApiError> {
        self.write(cookie)
    }

    fn retrieve(&self) -> Result<Option<String>, ApiError> {
        let contents = match std::fs::read_to_string(self.cookie_path()) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ApiError::Session(format!(
                    "unable to retrieve credentials, log in with `nodectl admin login`: {}",
                    e
                )))
            }
        };
        let cookie = contents.trim();
        if cookie.is_empty() {
            return Err(ApiError::Session(
                "cookie not in file, log in with `nodectl admin login`".to_string(),
            ));
        }
        Ok(Some(cookie.to_string()))
    }

    fn reset(&self) -> Result<(), ApiError> {
        self.write("")
    }
}

/// Produces the cookie that authenticates API requests.
#[async_trait]
pub trait CookieAuthenticator: Send + Sync {
    /// The previously saved cookie, if any.
    fn cookie(&self) -> Result<Option<String>, ApiError>;

    /// Log in and persist the new session cookie.
    async fn authenticate(&self, session: &SessionRequest) -> Result<String, ApiError>;

    /// Forget the stored session.
    fn logout(&self) -> Result<(), ApiError>;
}

/// Logs in through `POST /sessions` and keeps the resulting cookie in a [`CookieStore`].
pub struct SessionCookieAuthenticator {
    client: Client,
    base_url: String,
    store: Box<dyn CookieStore>,
}

impl SessionCookieAuthenticator {
    pub fn new(opts: &ClientOpts, store: Box<dyn CookieStore>) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_http_client(opts)?,
            base_url: opts.remote_node_url.clone(),
            store,
        })
    }
}

#[async_trait]
impl CookieAuthenticator for SessionCookieAuthenticator {
    fn cookie(&self) -> Result<Option<String>, ApiError> {
        self.store.retrieve()
    }

    async fn authenticate(&self, session: &SessionRequest) -> Result<String, ApiError> {
        let body = serde_json::to_value(session)
            .map_err(|e| ApiError::Session(format!("failed to encode credentials: {}", e)))?;
        let url = join_url(&self.base_url, "/sessions");
        debug!(email = %session.email, "authenticating");
        let response = send(&self.client, Method::Post, &url, Some(&body), None).await?;
        parse_response(&response)?;

        let cookie = find_session_cookie(&response.set_cookies).ok_or_else(|| {
            ApiError::Session("did not receive cookie with session id".to_string())
        })?;
        self.store.save(&cookie)?;
        Ok(cookie)
    }

    fn logout(&self) -> Result<(), ApiError> {
        self.store.reset()
    }
}

/// Pick the `name=value` pair of the session cookie out of `Set-Cookie` headers.
pub(crate) fn find_session_cookie(set_cookies: &[String]) -> Option<String> {
    set_cookies.iter().find_map(|header| {
        let pair = header.split(';').next()?.trim();
        let (name, _) = pair.split_once('=')?;
        (name == SESSION_COOKIE_NAME).then(|| pair.to_string())
    })
}
