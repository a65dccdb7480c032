//! reqwest-backed implementation of the Graph transport.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use super::token::TokenProvider;
use super::transport::{ApiResponse, ApiVersion, GraphRequest, GraphTransport, TransportError, Verb};
use crate::config::GraphSettings;

const USER_AGENT: &str = concat!("graphbook/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one base URL and one API version.
///
/// The client is `Send + Sync` and intended to be shared behind an `Arc`;
/// thread safety and connection reuse rest on `reqwest::Client`. Switching
/// API versions means building a new client.
pub struct GraphClient {
    http: reqwest::Client,
    base: Url,
    version: ApiVersion,
    token: Arc<dyn TokenProvider>,
}

impl GraphClient {
    pub fn new(
        settings: &GraphSettings,
        token: Arc<dyn TokenProvider>,
    ) -> Result<Self, TransportError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|e| TransportError::Config(format!("invalid base URL: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(TransportError::Config(format!(
                "base URL {base} cannot carry a path"
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base,
            version: settings.version,
            token,
        })
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    fn request_url(&self, request: &GraphRequest) -> Result<Url, TransportError> {
        if request.path.starts_with('/') {
            return Err(TransportError::InvalidRequest(format!(
                "path {:?} must be relative",
                request.path
            )));
        }
        let mut url = self
            .base
            .join(&format!("{}/{}", self.version.as_str(), request.path))
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &request.query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl GraphTransport for GraphClient {
    async fn send(&self, request: GraphRequest) -> Result<ApiResponse, TransportError> {
        let url = self.request_url(&request)?;
        let token = self.token.bearer_token().await?;

        tracing::debug!(verb = %request.verb, %url, "sending graph request");

        let method = match request.verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {token}"));

        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, body.content_type)
                .body(body.content);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                let value = value
                    .to_str()
                    .map(str::to_string)
                    .unwrap_or_else(|_| String::from_utf8_lossy(value.as_bytes()).into_owned());
                (name.as_str().to_string(), value)
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        tracing::debug!(status, url = %final_url, "graph response received");

        Ok(ApiResponse {
            status,
            url: final_url,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::StaticTokenProvider;

    fn client(base_url: &str, version: ApiVersion) -> GraphClient {
        let settings = GraphSettings {
            base_url: base_url.to_string(),
            version,
            timeout_seconds: 5,
        };
        GraphClient::new(&settings, Arc::new(StaticTokenProvider::new("t"))).unwrap()
    }

    #[test]
    fn url_includes_version_segment() {
        let client = client("https://graph.microsoft.com", ApiVersion::V1);
        let url = client
            .request_url(&GraphRequest::new(Verb::Get, "me/messages"))
            .unwrap();
        assert_eq!(url.as_str(), "https://graph.microsoft.com/v1.0/me/messages");
    }

    #[test]
    fn url_keeps_trailing_slash_and_query() {
        let client = client("https://graph.microsoft.com", ApiVersion::Beta);
        let url = client
            .request_url(
                &GraphRequest::new(Verb::Delete, "me/drive/items/abc/")
                    .query("$select", "id,name"),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://graph.microsoft.com/beta/me/drive/items/abc/?%24select=id%2Cname"
        );
    }

    #[test]
    fn absolute_paths_are_rejected() {
        let client = client("https://graph.microsoft.com", ApiVersion::V1);
        let err = client
            .request_url(&GraphRequest::new(Verb::Get, "/me"))
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(_)));
    }

    #[test]
    fn invalid_base_url_fails_construction() {
        let settings = GraphSettings {
            base_url: "not a url".to_string(),
            version: ApiVersion::V1,
            timeout_seconds: 5,
        };
        let result = GraphClient::new(&settings, Arc::new(StaticTokenProvider::new("t")));
        assert!(matches!(result, Err(TransportError::Config(_))));
    }
}
