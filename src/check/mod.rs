//! The HTTP check.
//!
//! A check run goes through these stages:
//!
//! 1. The configuration is validated. Invalid configurations are reported as
//!    `UNKNOWN` and no request is sent.
//! 2. One `GET` request is sent (see [`request`]). Timeouts and transport
//!    errors are `CRITICAL`.
//! 3. The response is evaluated (see [`evaluation`]). The body is only read
//!    when a pattern has to be searched and the status was accepted.
//!
//! Every outcome, including errors, ends up as a single [`Verdict`].
pub mod evaluation;
pub mod request;
pub mod status;
pub mod verdict;

use torrust_http_check_configuration::validator::Validator as _;
use torrust_http_check_configuration::Configuration;

use self::evaluation::{evaluate, Expectations, ResponseOutcome};
use self::request::Fetch;
use self::verdict::Verdict;

impl From<request::Error> for Verdict {
    fn from(err: request::Error) -> Self {
        Verdict::critical(err.to_string())
    }
}

/// Runs the check described by the configuration using the given fetcher.
pub async fn run<F>(config: &Configuration, fetcher: &F) -> Verdict
where
    F: Fetch + ?Sized,
{
    if let Err(err) = config.validate() {
        tracing::warn!(%err, "invalid configuration");
        return Verdict::unknown(err.to_string());
    }

    let expectations = Expectations::from(config);

    let fetched = match fetcher.get(&config.url).await {
        Ok(fetched) => fetched,
        Err(err) => {
            tracing::warn!(url = %config.url, %err, "request failed");
            return err.into();
        }
    };

    let status = fetched.status;

    tracing::debug!(status, "response received");

    if let Err(verdict) = expectations.check_status(status) {
        return verdict;
    }

    let body = if expectations.needs_body() {
        match fetched.body().await {
            Ok(body) => {
                tracing::debug!(bytes = body.len(), "body read");
                Some(body)
            }
            Err(err) => {
                tracing::warn!(%err, "unable to read the response body");
                return err.into();
            }
        }
    } else {
        None
    };

    let verdict = evaluate(&expectations, &ResponseOutcome::new(status, body));

    tracing::info!(%verdict, "check finished");

    verdict
}
