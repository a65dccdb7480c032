//! Request and response types for the Graph transport seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur before a usable HTTP response is obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid transport configuration: {0}")]
    Config(String),

    #[error("failed to obtain access token: {0}")]
    Token(#[from] super::token::TokenError),

    #[error("request could not be sent: {0}")]
    Send(#[from] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// HTTP verb for a Graph request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graph API version path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    #[default]
    #[serde(rename = "v1.0")]
    V1,
    Beta,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1.0",
            ApiVersion::Beta => "beta",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown API version string.
#[derive(Debug, Error)]
#[error("unknown API version {0:?}, expected \"v1.0\" or \"beta\"")]
pub struct ParseVersionError(String);

impl FromStr for ApiVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1.0" | "v1" => Ok(ApiVersion::V1),
            "beta" => Ok(ApiVersion::Beta),
            other => Err(ParseVersionError(other.to_string())),
        }
    }
}

/// A request body with an explicit content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    pub content_type: &'static str,
    pub content: String,
}

impl RequestBody {
    /// JSON body from an already-built value.
    pub fn json(value: &serde_json::Value) -> Self {
        Self {
            content_type: "application/json",
            content: value.to_string(),
        }
    }

    /// Plain-text body.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content_type: "text/plain",
            content: content.into(),
        }
    }
}

/// One Graph request, relative to the client's base URL and version segment.
#[derive(Debug, Clone)]
pub struct GraphRequest {
    pub verb: Verb,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl GraphRequest {
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }
}

/// A raw HTTP response as rendered by the demo surface.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Final request URL.
    pub url: String,
    /// Raw response headers in delivery order.
    pub headers: Vec<(String, String)>,
    /// Raw response body text.
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Case-insensitive header lookup; returns the first match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Transport seam used by every service handle.
///
/// One `send` call issues at most one HTTP request and delivers its outcome
/// exactly once. Implementations must be shareable across snippets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphTransport: Send + Sync {
    async fn send(&self, request: GraphRequest) -> Result<ApiResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_as_str_is_uppercase() {
        assert_eq!(Verb::Get.as_str(), "GET");
        assert_eq!(Verb::Patch.as_str(), "PATCH");
        assert_eq!(Verb::Delete.to_string(), "DELETE");
    }

    #[test]
    fn api_version_parse_and_display() {
        assert_eq!("v1.0".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("beta".parse::<ApiVersion>().unwrap(), ApiVersion::Beta);
        assert!("v2".parse::<ApiVersion>().is_err());
        assert_eq!(ApiVersion::V1.to_string(), "v1.0");
    }

    #[test]
    fn api_version_serde_rename() {
        let v: ApiVersion = serde_json::from_str("\"v1.0\"").unwrap();
        assert_eq!(v, ApiVersion::V1);
        assert_eq!(serde_json::to_string(&ApiVersion::Beta).unwrap(), "\"beta\"");
    }

    #[test]
    fn request_builder_accumulates_query() {
        let request = GraphRequest::new(Verb::Get, "me/messages")
            .query("$top", "10")
            .query("$skip", "20");
        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query[0], ("$top".to_string(), "10".to_string()));
        assert!(request.body.is_none());
    }

    #[test]
    fn response_success_range() {
        let mut response = ApiResponse {
            status: 200,
            url: String::new(),
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(response.is_success());
        response.status = 299;
        assert!(response.is_success());
        response.status = 301;
        assert!(!response.is_success());
        response.status = 404;
        assert!(!response.is_success());
        response.status = 199;
        assert!(!response.is_success());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = ApiResponse {
            status: 200,
            url: String::new(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: String::new(),
        };
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn json_body_sets_content_type() {
        let body = RequestBody::json(&serde_json::json!({"name": "report"}));
        assert_eq!(body.content_type, "application/json");
        assert_eq!(body.content, r#"{"name":"report"}"#);

        let text = RequestBody::text("file contents");
        assert_eq!(text.content_type, "text/plain");
    }
}
