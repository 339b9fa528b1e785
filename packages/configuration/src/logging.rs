//! Logging configuration.
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Logging threshold. Possible values are: `off`, `error`, `warn`, `info`,
/// `debug` and `trace`. Default is `off`, so only the check result is
/// printed.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Display, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Threshold {
    /// A threshold lower than all security levels.
    #[display("off")]
    Off,
    /// Corresponds to the `Error` security level.
    #[display("error")]
    Error,
    /// Corresponds to the `Warn` security level.
    #[display("warn")]
    Warn,
    /// Corresponds to the `Info` security level.
    #[display("info")]
    Info,
    /// Corresponds to the `Debug` security level.
    #[display("debug")]
    Debug,
    /// Corresponds to the `Trace` security level.
    #[display("trace")]
    Trace,
}
