//! Program to check an HTTP endpoint from a monitoring system.
//!
//! ```text
//! cargo run --bin check_http -- --url http://127.0.0.1:1212/health_check
//! ```
use std::process::ExitCode;

use torrust_http_check::console::checker::app;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    app::run().await
}
