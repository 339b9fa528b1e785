//! The result of a check run.
use derive_more::{Constructor, Display};

/// Health classification, from best to worst.
///
/// The numeric values are the conventional exit codes used by monitoring
/// systems (Nagios, Sensu, ...).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    #[display("OK")]
    Ok = 0,
    #[display("WARNING")]
    Warning = 1,
    #[display("CRITICAL")]
    Critical = 2,
    #[display("UNKNOWN")]
    Unknown = 3,
}

impl Level {
    #[must_use]
    pub fn exit_code(self) -> u8 {
        self as u8
    }
}

/// A [`Level`] and a human readable explanation.
#[derive(Debug, Display, Clone, PartialEq, Eq, Constructor)]
#[display("{level}: {message}")]
pub struct Verdict {
    pub level: Level,
    pub message: String,
}

impl Verdict {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Level::Ok, message.into())
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message.into())
    }

    #[must_use]
    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Level::Critical, message.into())
    }

    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Level::Unknown, message.into())
    }
}
