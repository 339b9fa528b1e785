//! Testing helpers for the Torrust HTTP check.
//!
//! They are used by the integration tests, so they are placed in a package
//! that is only a dev dependency.
pub mod configuration;
pub mod server;
