use torrust_http_check_configuration::{Configuration, Threshold};

/// This configuration is used for testing. It points to the given URL with a
/// short timeout, so a failing test does not hang for long.
#[must_use]
pub fn ephemeral(url: &str) -> Configuration {
    Configuration {
        url: url.to_owned(),
        timeout: 5,
        log_level: Threshold::Off, // Change to `Debug` for tests debugging
        ..Default::default()
    }
}
