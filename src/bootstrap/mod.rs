//! Setup of the ambient services of the check runner.
pub mod logging;
