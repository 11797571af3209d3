//! Integration tests for cookie authentication over real HTTP
//!
//! A one-shot server on a local port answers each connection with the next scripted
//! response and records the request line and `Cookie` header it saw.

use nodectl::client::{
    AuthenticatedHttpClient, ClientOpts, CookieAuthenticator, CookieStore, HttpClient,
    MemoryCookieStore, SessionCookieAuthenticator, SessionRequest,
};
use nodectl::error::ApiError;
use parking_lot::Mutex;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

struct ScriptedServer {
    url: String,
    seen: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl ScriptedServer {
    /// Serve exactly `responses.len()` connections, then stop listening.
    fn start(responses: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let handle = std::thread::spawn(move || {
            for response in responses {
                let (stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream);
                log.lock().push(read_request(&mut reader));
                let mut stream = reader.into_inner();
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
        });
        Self { url, seen, handle }
    }

    /// Wait for every scripted connection and return what was requested.
    fn finish(self) -> Vec<String> {
        self.handle.join().unwrap();
        let seen = self.seen.lock().clone();
        seen
    }
}

/// `"<METHOD> <path> cookie=<value>"`, with the body drained.
fn read_request(reader: &mut impl BufRead) -> String {
    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();

    let mut cookie = String::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            match name.trim().to_ascii_lowercase().as_str() {
                "cookie" => cookie = value.trim().to_string(),
                "content-length" => content_length = value.trim().parse().unwrap(),
                _ => {}
            }
        }
    }
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).unwrap();
    format!("{} {} cookie={}", method, path, cookie)
}

fn http_response(status: &str, extra_headers: &[&str], body: &str) -> String {
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        body.len()
    );
    for header in extra_headers {
        response.push_str(header);
        response.push_str("\r\n");
    }
    response.push_str("\r\n");
    response.push_str(body);
    response
}

fn unauthorized() -> String {
    http_response(
        "401 Unauthorized",
        &[],
        r#"{"errors":[{"detail":"Unauthorized"}]}"#,
    )
}

fn jobs_page() -> String {
    http_response("200 OK", &[], r#"{"data":[]}"#)
}

fn opts(url: &str) -> ClientOpts {
    ClientOpts {
        remote_node_url: url.to_string(),
        insecure_skip_verify: false,
        request_timeout: Duration::from_secs(5),
    }
}

fn credentials() -> SessionRequest {
    SessionRequest {
        email: "admin@example.com".to_string(),
        password: "hunter2hunter2".to_string(),
    }
}

fn client_for(
    server: &ScriptedServer,
    session: Option<SessionRequest>,
) -> (AuthenticatedHttpClient, Arc<SessionCookieAuthenticator>) {
    let opts = opts(&server.url);
    let authenticator = Arc::new(
        SessionCookieAuthenticator::new(&opts, Box::new(MemoryCookieStore::default())).unwrap(),
    );
    let client = AuthenticatedHttpClient::new(
        &opts,
        Arc::clone(&authenticator) as Arc<dyn CookieAuthenticator>,
        session,
    )
    .unwrap();
    (client, authenticator)
}

#[tokio::test]
async fn test_rejected_session_logs_in_and_replays_with_fresh_cookie() {
    let server = ScriptedServer::start(vec![
        unauthorized(),
        http_response(
            "200 OK",
            &[
                "Set-Cookie: theme=dark; Path=/",
                "Set-Cookie: clsession=fresh; Path=/; HttpOnly",
            ],
            r#"{"data":{"type":"session","id":"sessionID","attributes":{"authenticated":true}}}"#,
        ),
        jobs_page(),
    ]);
    let (client, authenticator) = client_for(&server, Some(credentials()));

    let response = client.get("/v2/jobs").await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(
        authenticator.cookie().unwrap().as_deref(),
        Some("clsession=fresh")
    );
    assert_eq!(
        server.finish(),
        vec![
            "GET /v2/jobs cookie=",
            "POST /sessions cookie=",
            "GET /v2/jobs cookie=clsession=fresh",
        ]
    );
}

#[tokio::test]
async fn test_failed_login_returns_the_original_unauthorized_response() {
    let server = ScriptedServer::start(vec![
        unauthorized(),
        http_response(
            "401 Unauthorized",
            &[],
            r#"{"errors":[{"detail":"Invalid email or password"}]}"#,
        ),
    ]);
    let (client, authenticator) = client_for(&server, Some(credentials()));

    let response = client.get("/v2/jobs").await.unwrap();
    assert_eq!(response.status, 401);
    assert!(String::from_utf8(response.body)
        .unwrap()
        .contains(r#""detail":"Unauthorized""#));
    assert_eq!(authenticator.cookie().unwrap(), None);
    assert_eq!(
        server.finish(),
        vec!["GET /v2/jobs cookie=", "POST /sessions cookie="]
    );
}

#[tokio::test]
async fn test_no_credentials_means_no_retry() {
    let server = ScriptedServer::start(vec![unauthorized()]);
    let (client, _) = client_for(&server, None);

    let response = client.get("/v2/jobs").await.unwrap();
    assert_eq!(response.status, 401);
    assert_eq!(server.finish(), vec!["GET /v2/jobs cookie="]);
}

#[tokio::test]
async fn test_stored_cookie_is_sent_with_requests() {
    let server = ScriptedServer::start(vec![jobs_page()]);
    let opts = opts(&server.url);
    let store = MemoryCookieStore::default();
    store.save("clsession=stored").unwrap();
    let authenticator: Arc<dyn CookieAuthenticator> =
        Arc::new(SessionCookieAuthenticator::new(&opts, Box::new(store)).unwrap());
    let client = AuthenticatedHttpClient::new(&opts, authenticator, Some(credentials())).unwrap();

    assert_eq!(client.get("/v2/jobs").await.unwrap().status, 200);
    assert_eq!(
        server.finish(),
        vec!["GET /v2/jobs cookie=clsession=stored"]
    );
}

#[tokio::test]
async fn test_login_without_session_cookie_is_a_session_error() {
    let server = ScriptedServer::start(vec![http_response(
        "200 OK",
        &["Set-Cookie: theme=dark; Path=/"],
        r#"{"data":{"type":"session","id":"sessionID","attributes":{}}}"#,
    )]);
    let (_, authenticator) = client_for(&server, None);

    let result = authenticator.authenticate(&credentials()).await;
    assert!(matches!(result, Err(ApiError::Session(_))));
    assert_eq!(authenticator.cookie().unwrap(), None);
    assert_eq!(server.finish(), vec!["POST /sessions cookie="]);
}
