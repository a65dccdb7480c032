//! Calendar event endpoints for the signed-in user.

use std::sync::Arc;

use super::ItemId;
use crate::graph::{ApiResponse, GraphRequest, GraphTransport, RequestBody, TransportError, Verb};

/// Handle for calendar operations.
pub struct EventsService {
    transport: Arc<dyn GraphTransport>,
}

impl EventsService {
    pub(super) fn new(transport: Arc<dyn GraphTransport>) -> Self {
        Self { transport }
    }

    /// `GET me/events`
    pub async fn list_events(&self) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Get, "me/events"))
            .await
    }

    /// `POST me/events`
    pub async fn create_event(&self, body: RequestBody) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Post, "me/events").body(body))
            .await
    }

    /// `PATCH me/events/{id}`
    pub async fn update_event(
        &self,
        id: &ItemId,
        body: RequestBody,
    ) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Patch, format!("me/events/{id}")).body(body))
            .await
    }

    /// `DELETE me/events/{id}`
    pub async fn delete_event(&self, id: &ItemId) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Delete, format!("me/events/{id}")))
            .await
    }
}
