//! Command-line runner of the HTTP check.
//!
//! It parses the arguments, loads the configuration, runs the check and
//! translates the verdict into the process output and exit code.
pub mod app;
pub mod console;
pub mod logger;
pub mod printer;
