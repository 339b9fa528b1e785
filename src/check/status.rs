//! HTTP status lines, as shown in the check messages.
use hyper::StatusCode;

/// Returns the status code followed by its canonical reason phrase.
///
/// ```text
/// 200 -> "200 OK"
/// 404 -> "404 Not Found"
/// 599 -> "599 "
/// ```
///
/// Codes without a canonical reason keep the separator, so the line always
/// has the same shape.
#[must_use]
pub fn line(code: u16) -> String {
    format!("{code} {}", reason(code))
}

/// The canonical reason phrase for the code, or an empty string when there is none.
#[must_use]
pub fn reason(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or_default()
}
