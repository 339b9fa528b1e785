//! Local HTTP servers to run checks against.
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Where redirection responses point to.
pub const REDIRECTION_TARGET: &str = "/redirected";

/// A server that answers every request with the same status and body.
///
/// Redirection responses include a `Location` header pointing to
/// [`REDIRECTION_TARGET`], which is answered the same way. A client
/// following redirections would send more than one request.
pub struct StubServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Starts the server on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Will panic if the status code is not valid or the server can't be started.
    pub async fn start(status: u16, body: &'static str) -> Self {
        let status = StatusCode::from_u16(status).expect("it should be a valid status code");

        let hits = Arc::new(AtomicUsize::default());
        let counter = hits.clone();

        let app = Router::new().fallback(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                respond(status, body)
            }
        });

        let listener = bind().await;
        let addr = listener.local_addr().expect("it should have a local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("the stub server should run");
        });

        Self { addr, hits, handle }
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn respond(status: StatusCode, body: &'static str) -> Response {
    let mut response = (status, body).into_response();

    if status.is_redirection() {
        response
            .headers_mut()
            .insert(header::LOCATION, HeaderValue::from_static(REDIRECTION_TARGET));
    }

    response
}

/// A server that accepts connections but never answers.
pub struct SilentServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl SilentServer {
    /// Starts the server on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Will panic if the server can't be started.
    pub async fn start() -> Self {
        let listener = bind().await;
        let addr = listener.local_addr().expect("it should have a local address");

        let handle = tokio::spawn(async move {
            // Connections are kept open until the server is dropped.
            let mut connections = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                connections.push(stream);
            }
        });

        Self { addr, handle }
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }
}

impl Drop for SilentServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A URL where nothing is listening.
///
/// # Panics
///
/// Will panic if it can't get a free port.
pub async fn unreachable_url() -> String {
    let listener = bind().await;
    let addr = listener.local_addr().expect("it should have a local address");

    drop(listener);

    format!("http://{addr}/")
}

async fn bind() -> TcpListener {
    TcpListener::bind("127.0.0.1:0")
        .await
        .expect("it should bind to an ephemeral port")
}
