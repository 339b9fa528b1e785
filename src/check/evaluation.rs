//! Decision policy of the check.
//!
//! It maps a response (status code and, only when needed, the body) to a
//! [`Verdict`]:
//!
//! 1. An explicit expected status code must be matched exactly.
//! 2. Otherwise any `2xx` status is accepted.
//! 3. A `3xx` status is accepted only when redirections are allowed. If they
//!    are not, the verdict is a `WARNING`.
//! 4. Any other status is `CRITICAL`.
//!
//! When the status is accepted, the body is searched for the configured
//! pattern, if any.
use std::ops::RangeInclusive;

use derive_more::Constructor;
use hyper::body::Bytes;
use memchr::memmem;
use torrust_http_check_configuration::Configuration;

use super::status;
use super::verdict::Verdict;

/// From `200 OK` to `226 IM Used`.
const SUCCESS_RANGE: RangeInclusive<u16> = 200..=226;

/// From `300 Multiple Choices` to `308 Permanent Redirect`.
const REDIRECTION_RANGE: RangeInclusive<u16> = 300..=308;

/// A literal text searched in the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// The body must contain it.
    Required(String),
    /// The body must not contain it.
    Forbidden(String),
}

impl Pattern {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Required(pattern) | Pattern::Forbidden(pattern) => pattern,
        }
    }

    /// Searches the pattern in the body. The search is case-sensitive and
    /// exact: the pattern is not a regular expression.
    #[must_use]
    pub fn verify(&self, status: u16, body: &[u8]) -> Verdict {
        let pattern = self.as_str();
        let length = body.len();

        if memmem::find(body, pattern.as_bytes()).is_some() {
            let message = format!("{} found /{pattern}/ in {length} bytes", status::line(status));

            match self {
                Pattern::Required(_) => Verdict::ok(message),
                Pattern::Forbidden(_) => Verdict::critical(message),
            }
        } else {
            let message = format!("did not find /{pattern}/ in {length} bytes");

            match self {
                Pattern::Required(_) => Verdict::critical(message),
                Pattern::Forbidden(_) => Verdict::ok(message),
            }
        }
    }
}

/// What a healthy response looks like.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expectations {
    /// An explicit, non-default, expected status code.
    pub status_code: Option<u16>,
    pub redirect_ok: bool,
    pub pattern: Option<Pattern>,
}

impl From<&Configuration> for Expectations {
    fn from(config: &Configuration) -> Self {
        let pattern = match (config.required_pattern(), config.forbidden_pattern()) {
            (Some(required), _) => Some(Pattern::Required(required.to_owned())),
            (None, Some(forbidden)) => Some(Pattern::Forbidden(forbidden.to_owned())),
            (None, None) => None,
        };

        Self {
            status_code: config.expected_status_code(),
            redirect_ok: config.redirect_ok,
            pattern,
        }
    }
}

impl Expectations {
    /// Classifies the status code.
    ///
    /// # Errors
    ///
    /// Will return the final [`Verdict`] when the status does not meet the
    /// expectations. `Ok` means the body has to be verified next.
    pub fn check_status(&self, status: u16) -> Result<(), Verdict> {
        if let Some(expected) = self.status_code {
            if status == expected {
                return Ok(());
            }

            return Err(Verdict::critical(format!(
                "expected HTTP status {}, got {}",
                status::line(expected),
                status::line(status)
            )));
        }

        if SUCCESS_RANGE.contains(&status) {
            return Ok(());
        }

        if REDIRECTION_RANGE.contains(&status) {
            if self.redirect_ok {
                return Ok(());
            }

            return Err(Verdict::warning(format!("{}: unexpected redirection", status::line(status))));
        }

        Err(Verdict::critical(status::line(status)))
    }

    /// Whether the body must be read to reach a verdict.
    #[must_use]
    pub fn needs_body(&self) -> bool {
        self.pattern.is_some()
    }

    /// Verifies the body of a response whose status was accepted.
    #[must_use]
    pub fn verify_body(&self, status: u16, body: &[u8]) -> Verdict {
        match &self.pattern {
            Some(pattern) => pattern.verify(status, body),
            None => Verdict::ok(status::line(status)),
        }
    }
}

/// A received response.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct ResponseOutcome {
    pub status: u16,
    /// Only present when a pattern has to be verified.
    pub body: Option<Bytes>,
}

/// Applies the decision policy to a response.
#[must_use]
pub fn evaluate(expectations: &Expectations, outcome: &ResponseOutcome) -> Verdict {
    if let Err(verdict) = expectations.check_status(outcome.status) {
        return verdict;
    }

    expectations.verify_body(outcome.status, outcome.body.as_deref().unwrap_or_default())
}
