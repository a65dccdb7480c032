//! Directory group endpoints.

use std::sync::Arc;

use super::ItemId;
use crate::graph::{ApiResponse, GraphRequest, GraphTransport, RequestBody, TransportError, Verb};

/// Handle for tenant group operations.
pub struct GroupsService {
    transport: Arc<dyn GraphTransport>,
}

impl GroupsService {
    pub(super) fn new(transport: Arc<dyn GraphTransport>) -> Self {
        Self { transport }
    }

    /// `GET myOrganization/groups`
    pub async fn list_groups(&self) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Get, "myOrganization/groups"))
            .await
    }

    /// `POST myOrganization/groups`
    pub async fn create_group(&self, body: RequestBody) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Post, "myOrganization/groups").body(body))
            .await
    }

    /// `PATCH groups/{id}`
    pub async fn update_group(
        &self,
        id: &ItemId,
        body: RequestBody,
    ) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Patch, format!("groups/{id}")).body(body))
            .await
    }

    /// `DELETE groups/{id}`
    pub async fn delete_group(&self, id: &ItemId) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Delete, format!("groups/{id}")))
            .await
    }
}
