//! Setup for the application logging.
//!
//! It redirects the log info to the standard error with the threshold defined
//! in the configuration. The standard output is reserved for the verdict, which
//! is what monitoring systems read.
//!
//! - `Off` (default)
//! - `Error`
//! - `Warn`
//! - `Info`
//! - `Debug`
//! - `Trace`
//!
//! Refer to the [configuration crate documentation](torrust_http_check_configuration) to know how to change log settings.
use std::io;
use std::sync::Once;

use torrust_http_check_configuration::{Configuration, Threshold};
use tracing::debug;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

/// It redirects the log info to the standard error with the threshold defined in the configuration.
pub fn setup(cfg: &Configuration) {
    let tracing_level = map_to_tracing_level_filter(cfg.log_level);

    if tracing_level == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        tracing_stderr_init(tracing_level);
    });
}

fn map_to_tracing_level_filter(threshold: Threshold) -> LevelFilter {
    match threshold {
        Threshold::Off => LevelFilter::OFF,
        Threshold::Error => LevelFilter::ERROR,
        Threshold::Warn => LevelFilter::WARN,
        Threshold::Info => LevelFilter::INFO,
        Threshold::Debug => LevelFilter::DEBUG,
        Threshold::Trace => LevelFilter::TRACE,
    }
}

fn tracing_stderr_init(filter: LevelFilter) {
    let () = tracing_subscriber::fmt()
        .compact()
        .with_max_level(filter)
        .with_writer(io::stderr)
        .init();

    debug!("logging initialized with threshold {filter}");
}
