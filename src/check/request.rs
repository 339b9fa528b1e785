//! Request stage.
//!
//! It sends exactly one `GET` request. Redirections are never followed: the
//! first response is the one evaluated, whatever its status.
//!
//! System proxies are ignored: the check always connects to the target.
//!
//! The body is not downloaded with the headers. [`Fetched::body`] reads it on
//! demand and dropping a [`Fetched`] without reading it releases the
//! connection.
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt as _;
use hyper::body::Bytes;
use reqwest::redirect::Policy;
use reqwest::Client as HttpClient;
use thiserror::Error;

pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Request exceeded timeout of {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("Request error: {err}")]
    RequestError { err: DynError },

    #[error("{err}")]
    BodyReadError { err: DynError },
}

/// A response whose body has not been read yet.
pub struct Fetched {
    pub status: u16,
    body: BoxFuture<'static, Result<Bytes, Error>>,
}

impl fmt::Debug for Fetched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetched").field("status", &self.status).finish_non_exhaustive()
    }
}

impl Fetched {
    #[must_use]
    pub fn new(status: u16, body: BoxFuture<'static, Result<Bytes, Error>>) -> Self {
        Self { status, body }
    }

    /// Reads the whole body, consuming the response.
    ///
    /// # Errors
    ///
    /// Will return an error if the body can not be read.
    pub async fn body(self) -> Result<Bytes, Error> {
        self.body.await
    }
}

/// Something able to perform the `GET` request of a check.
pub trait Fetch {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Fetched, Error>>;
}

/// [`Fetch`] implementation using a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Option<Duration>,
}

impl HttpFetcher {
    /// `None` means the request can take as long as the server wants.
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    fn client(&self) -> Result<HttpClient, Error> {
        let builder = HttpClient::builder().redirect(Policy::none()).no_proxy();

        let builder = match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        builder.build().map_err(|err| Error::RequestError { err: Arc::new(err) })
    }
}

impl Fetch for HttpFetcher {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Fetched, Error>> {
        async move {
            let client = self.client()?;

            tracing::debug!(url, timeout = ?self.timeout, "sending request");

            let response = client
                .get(url)
                .send()
                .await
                .map_err(|err| classify(self.timeout, err, |err| Error::RequestError { err }))?;

            let status = response.status().as_u16();

            let timeout = self.timeout;
            let body = response
                .bytes()
                .map(move |result| result.map_err(|err| classify(timeout, err, |err| Error::BodyReadError { err })))
                .boxed();

            Ok::<_, Error>(Fetched::new(status, body))
        }
        .boxed()
    }
}

/// Timeouts are reported apart from any other failure.
fn classify(timeout: Option<Duration>, err: reqwest::Error, otherwise: fn(DynError) -> Error) -> Error {
    match timeout {
        Some(timeout) if err.is_timeout() => Error::Timeout {
            seconds: timeout.as_secs(),
        },
        _ => otherwise(Arc::new(err)),
    }
}
