//! Result-to-display mapping for the demo surface.

/// Display class of an HTTP status code, used to pick the status color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Informational and success responses (100-299).
    Ok,
    /// Redirects (300-399).
    Redirect,
    /// Client and server errors (400-599).
    Error,
    /// Anything outside the known ranges.
    Neutral,
}

impl StatusClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            100..=299 => StatusClass::Ok,
            300..=399 => StatusClass::Redirect,
            400..=599 => StatusClass::Error,
            _ => StatusClass::Neutral,
        }
    }
}

/// Formats raw headers one per line, in delivery order.
pub fn format_headers(headers: &[(String, String)]) -> String {
    headers
        .iter()
        .map(|(name, value)| format!("{name} : {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-prints a JSON body, or returns the raw text unchanged when the
/// body is not valid JSON.
pub fn format_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}
