//! Signed-in user profile endpoints.

use std::sync::Arc;

use crate::graph::{ApiResponse, GraphRequest, GraphTransport, TransportError, Verb};

/// Handle for profile operations.
pub struct MeService {
    transport: Arc<dyn GraphTransport>,
}

impl MeService {
    pub(super) fn new(transport: Arc<dyn GraphTransport>) -> Self {
        Self { transport }
    }

    /// `GET me`
    pub async fn get_me(&self) -> Result<ApiResponse, TransportError> {
        self.transport.send(GraphRequest::new(Verb::Get, "me")).await
    }

    /// `GET me?$select=AboutMe,Responsibilities,Tags`
    pub async fn get_me_selected(&self) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(
                GraphRequest::new(Verb::Get, "me").query("$select", "AboutMe,Responsibilities,Tags"),
            )
            .await
    }

    /// `GET me/{segment}` for related entities such as `manager`,
    /// `directReports`, `memberOf`, or `userPhoto`.
    pub async fn entity(&self, segment: &str) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Get, format!("me/{segment}")))
            .await
    }
}
