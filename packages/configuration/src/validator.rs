//! Trait to validate semantic errors.
//!
//! Errors could involve more than one configuration option. Some configuration
//! combinations can be incompatible.
use thiserror::Error;

use crate::Configuration;

/// Errors that can occur validating the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticValidationError {
    #[error("no URL specified")]
    MissingUrl,

    #[error("--query and --negquery can not be used simultaneously")]
    IncompatiblePatterns,
}

pub trait Validator {
    /// # Errors
    ///
    /// Will return an error if the configuration is invalid.
    fn validate(&self) -> Result<(), SemanticValidationError>;
}

impl Validator for Configuration {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        if self.url.is_empty() {
            return Err(SemanticValidationError::MissingUrl);
        }

        if self.required_pattern().is_some() && self.forbidden_pattern().is_some() {
            return Err(SemanticValidationError::IncompatiblePatterns);
        }

        Ok(())
    }
}
