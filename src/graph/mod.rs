//! Microsoft Graph transport layer.
//!
//! This module defines the request/response types shared by every service
//! handle, the [`GraphTransport`] seam the catalog executes against, and the
//! reqwest-backed [`GraphClient`] implementation used by the demo binary.

mod client;
mod token;
mod transport;

pub use client::GraphClient;
pub use token::{EnvTokenProvider, StaticTokenProvider, TokenError, TokenProvider};
pub use transport::{
    ApiResponse, ApiVersion, GraphRequest, GraphTransport, ParseVersionError, RequestBody,
    TransportError, Verb,
};

#[cfg(test)]
pub use transport::MockGraphTransport;
