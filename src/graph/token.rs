//! Bearer-token acquisition seam.
//!
//! OAuth flows are out of scope; callers supply a token directly or point
//! the client at an environment variable that holds one.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while obtaining an access token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("access token environment variable {0} is not set")]
    MissingEnvVar(String),

    #[error("access token is empty")]
    Empty,
}

/// Supplies a bearer token for each outgoing request.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Result<String, TokenError>;
}

/// A fixed token supplied at construction time.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<String, TokenError> {
        if self.token.is_empty() {
            return Err(TokenError::Empty);
        }
        Ok(self.token.clone())
    }
}

/// Reads the token from an environment variable on every request, so a
/// refreshed token is picked up without rebuilding the client.
pub struct EnvTokenProvider {
    var: String,
}

impl EnvTokenProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

#[async_trait]
impl TokenProvider for EnvTokenProvider {
    async fn bearer_token(&self) -> Result<String, TokenError> {
        match std::env::var(&self.var) {
            Ok(token) if !token.is_empty() => Ok(token),
            Ok(_) => Err(TokenError::Empty),
            Err(_) => Err(TokenError::MissingEnvVar(self.var.clone())),
        }
    }
}
