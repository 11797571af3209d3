//! Node API client: authenticated transport, session cookies and JSON:API decoding.

mod http;
mod jsonapi;
mod session;

pub use http::{
    build_http_client, ApiResponse, AuthenticatedHttpClient, ClientOpts, HttpClient, Method,
};
pub use jsonapi::{decode_many, decode_one, parse_response};
pub use session::{
    CookieAuthenticator, CookieStore, DiskCookieStore, MemoryCookieStore,
    SessionCookieAuthenticator, SessionRequest, SESSION_COOKIE_NAME,
};
