//! **Torrust HTTP Check** is a monitoring check for HTTP endpoints.
//!
//! It sends one `GET` request to a URL and evaluates the response:
//!
//! - The status code must be a success (`2xx`), an allowed redirection
//!   (`3xx`) or exactly the expected one, when configured.
//! - Optionally, a pattern must be present in (or absent from) the body.
//!
//! The result is a [`Verdict`](check::verdict::Verdict): `OK`, `WARNING`,
//! `CRITICAL` or `UNKNOWN`, plus a message. The command-line runner prints it
//! and exits with the code monitoring systems like Nagios or Sensu expect.
//!
//! ```text
//! $ check_http --url http://127.0.0.1:1212/health_check --query Ok
//! OK: 200 OK found /Ok/ in 15 bytes
//! ```
//!
//! # Components
//!
//! - [`check`]: the request, the decision policy and the verdict.
//! - [`console`]: the command-line runner.
//! - [`bootstrap`]: logging setup.
//!
//! The configuration lives in its own package:
//! [`torrust_http_check_configuration`].
pub mod bootstrap;
pub mod check;
pub mod console;
