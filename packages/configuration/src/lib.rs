//! Configuration data structures for the Torrust HTTP check.
//!
//! The configuration is loaded from several sources. From lowest to highest
//! precedence:
//!
//! 1. Default values.
//! 2. An optional TOML file.
//! 3. Environment variables prefixed with `TORRUST_HTTP_CHECK_`.
//! 4. Command-line overrides (see [`Overrides`]).
//!
//! For example, this file:
//!
//! ```toml
//! url = "http://127.0.0.1:1212/health_check"
//! timeout = 5
//! redirect_ok = true
//! query = "Ok"
//! log_level = "debug"
//! ```
//!
//! can be partially overridden with `TORRUST_HTTP_CHECK_TIMEOUT=10`.
//!
//! The text options (`url`, `query` and `negquery`) are taken verbatim from
//! their environment variables: `TORRUST_HTTP_CHECK_QUERY=404` searches for
//! the text `404`.
pub mod logging;
pub mod validator;

use std::collections::BTreeMap;
use std::env;
use std::sync::Arc;
use std::time::Duration;

use camino::Utf8PathBuf;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::logging::Threshold;

/// Default time limit, in seconds, for the request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Prefix for the environment variables that override configuration options.
pub const ENV_VAR_PREFIX: &str = "TORRUST_HTTP_CHECK_";

/// The TOML configuration file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TORRUST_HTTP_CHECK_CONFIG_TOML_PATH";

/// Options whose environment variables are never parsed as numbers,
/// booleans or arrays.
const TEXT_OPTIONS: [&str; 3] = ["url", "query", "negquery"];

/// The status code the check expects when none is configured.
const DEFAULT_RESPONSE_CODE: u16 = 200;

/// Validated or not, the options of one check run.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Configuration {
    /// URL to connect to.
    #[serde(default)]
    pub url: String,

    /// Time limit, in seconds, for the request. `0` means no limit.
    #[serde(default = "Configuration::default_timeout")]
    pub timeout: u64,

    /// Accept redirection responses (`3xx`) as healthy.
    #[serde(default)]
    pub redirect_ok: bool,

    /// Expected HTTP status code. `0` or `200` fall back to the default
    /// policy, where any `2xx` is accepted.
    #[serde(default)]
    pub response_code: Option<u16>,

    /// Pattern that must exist in the response body.
    #[serde(default)]
    pub query: Option<String>,

    /// Pattern that must be absent in the response body.
    #[serde(default)]
    pub negquery: Option<String>,

    /// Logging threshold. Logs are written to `stderr`.
    #[serde(default = "Configuration::default_log_level")]
    pub log_level: Threshold,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            url: String::default(),
            timeout: Self::default_timeout(),
            redirect_ok: false,
            response_code: None,
            query: None,
            negquery: None,
            log_level: Self::default_log_level(),
        }
    }
}

impl Configuration {
    fn default_timeout() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    fn default_log_level() -> Threshold {
        Threshold::Off
    }

    /// Loads the configuration merging all the sources described in the
    /// [crate documentation](crate).
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration file was given but does not
    /// exist, or if any source contains invalid values.
    pub fn load(info: &Info, overrides: &Overrides) -> Result<Configuration, Error> {
        let mut figment = Figment::from(Serialized::defaults(Configuration::default()));

        if let Some(path) = &info.config_toml_path {
            if !path.exists() {
                return Err(Error::MissingConfigFile { path: path.clone() });
            }

            figment = figment.merge(Toml::file(path));
        }

        let config: Configuration = figment
            .merge(Env::prefixed(ENV_VAR_PREFIX).ignore(&["config_toml_path", "url", "query", "negquery"]))
            .merge(Serialized::globals(text_env_vars()))
            .merge(Serialized::globals(overrides))
            .extract()?;

        Ok(config)
    }

    /// The request deadline, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// The explicitly expected status code.
    ///
    /// It's `None` when the option is missing or set to a value that means
    /// "use the default policy" (`0` or `200`).
    #[must_use]
    pub fn expected_status_code(&self) -> Option<u16> {
        self.response_code
            .filter(|&code| code != 0 && code != DEFAULT_RESPONSE_CODE)
    }

    /// The pattern that must be present in the body, when not empty.
    #[must_use]
    pub fn required_pattern(&self) -> Option<&str> {
        non_empty(self.query.as_deref())
    }

    /// The pattern that must be absent in the body, when not empty.
    #[must_use]
    pub fn forbidden_pattern(&self) -> Option<&str> {
        non_empty(self.negquery.as_deref())
    }
}

fn text_env_vars() -> BTreeMap<&'static str, String> {
    TEXT_OPTIONS
        .into_iter()
        .filter_map(|option| {
            let name = format!("{ENV_VAR_PREFIX}{}", option.to_uppercase());

            env::var(name).ok().map(|value| (option, value))
        })
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Information required for loading config.
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml_path: Option<Utf8PathBuf>,
}

impl Info {
    #[must_use]
    pub fn new(config_toml_path: Option<Utf8PathBuf>) -> Self {
        Self { config_toml_path }
    }
}

/// Options given on the command line.
///
/// Only the options that were actually given are merged on top of the other
/// sources.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_ok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negquery: Option<String>,
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Unable to find the configuration file: `{path}`")]
    MissingConfigFile { path: Utf8PathBuf },

    #[error("Failed processing the configuration: {source}")]
    ConfigError { source: Arc<figment::Error> },
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError { source: Arc::new(err) }
    }
}
