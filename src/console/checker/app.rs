//! Program to check an HTTP endpoint from a monitoring system.
//!
//! Run providing the options on the command line:
//!
//! ```text
//! cargo run --bin check_http -- --url http://127.0.0.1:1212/health_check --query '"status":"Ok"'
//! ```
//!
//! Run providing a config file path:
//!
//! ```text
//! cargo run --bin check_http -- --config-path "./share/default/config/check_http.toml"
//! TORRUST_HTTP_CHECK_CONFIG_TOML_PATH="./share/default/config/check_http.toml" cargo run --bin check_http
//! ```
//!
//! Every option can also be given with an environment variable:
//!
//! ```text
//! TORRUST_HTTP_CHECK_URL=http://127.0.0.1:1212/health_check TORRUST_HTTP_CHECK_TIMEOUT=5 cargo run --bin check_http
//! ```
//!
//! The verdict is printed to `stdout` and the exit code follows the usual
//! monitoring plugin convention:
//!
//! | Verdict    | Exit code |
//! |------------|-----------|
//! | `OK`       | 0         |
//! | `WARNING`  | 1         |
//! | `CRITICAL` | 2         |
//! | `UNKNOWN`  | 3         |
use std::process::ExitCode;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::error::ErrorKind;
use clap::Parser;
use torrust_http_check_configuration::{Configuration, Info, Overrides};

use super::console::Console;
use super::printer::Printer;
use crate::bootstrap::logging;
use crate::check::request::HttpFetcher;
use crate::check::verdict::Verdict;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL to connect to.
    #[arg(short, long)]
    url: Option<String>,

    /// Time limit, in seconds, for the request [default: 15].
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Accept redirection.
    #[arg(short, long, overrides_with = "no_redirect_ok")]
    redirect_ok: bool,

    /// Do not accept redirection, even when the configuration file or the
    /// environment does.
    #[arg(long, overrides_with = "redirect_ok")]
    no_redirect_ok: bool,

    /// Expected HTTP status code [default: 200].
    #[arg(long)]
    response_code: Option<u16>,

    /// Query for pattern that must exist in response body.
    #[arg(short, long)]
    query: Option<String>,

    /// Query for pattern that must be absent in response body.
    #[arg(short, long)]
    negquery: Option<String>,

    /// Path to the TOML configuration file.
    #[arg(short, long, env = "TORRUST_HTTP_CHECK_CONFIG_TOML_PATH")]
    config_path: Option<Utf8PathBuf>,
}

impl From<Args> for Overrides {
    fn from(args: Args) -> Self {
        Self {
            url: args.url,
            timeout: args.timeout,
            redirect_ok: match (args.redirect_ok, args.no_redirect_ok) {
                (true, _) => Some(true),
                (false, true) => Some(false),
                (false, false) => None,
            },
            response_code: args.response_code,
            query: args.query,
            negquery: args.negquery,
        }
    }
}

/// Runs the check and returns the exit code for the process.
///
/// `--help` and `--version` terminate the process directly.
pub async fn run() -> ExitCode {
    let verdict = match Args::try_parse() {
        Ok(args) => check(args).await,
        Err(err) => match verdict_for(&err) {
            Some(verdict) => verdict,
            None => err.exit(),
        },
    };

    report(&verdict, &Console::new())
}

/// The verdict for a command line that could not be parsed.
///
/// It's `None` for `--help` and `--version`, which are not errors.
fn verdict_for(err: &clap::Error) -> Option<Verdict> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(Verdict::unknown(first_line(&err.to_string()))),
    }
}

async fn check(args: Args) -> Verdict {
    let config = match setup_config(args) {
        Ok(config) => config,
        Err(err) => return Verdict::unknown(format!("{err:#}")),
    };

    logging::setup(&config);

    let fetcher = HttpFetcher::new(config.timeout());

    crate::check::run(&config, &fetcher).await
}

fn setup_config(args: Args) -> Result<Configuration> {
    let info = Info::new(args.config_path.clone());

    Configuration::load(&info, &args.into()).context("invalid configuration")
}

/// Prints the verdict and returns the matching exit code.
#[must_use]
pub fn report(verdict: &Verdict, printer: &impl Printer) -> ExitCode {
    printer.println(&verdict.to_string());

    ExitCode::from(verdict.level.exit_code())
}

fn first_line(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();

    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
