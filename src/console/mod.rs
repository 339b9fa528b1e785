//! Console applications.
pub mod checker;
