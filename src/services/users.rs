//! Directory user endpoints.

use std::sync::Arc;

use crate::graph::{ApiResponse, GraphRequest, GraphTransport, RequestBody, TransportError, Verb};

/// Handle for tenant user operations.
pub struct UsersService {
    transport: Arc<dyn GraphTransport>,
}

impl UsersService {
    pub(super) fn new(transport: Arc<dyn GraphTransport>) -> Self {
        Self { transport }
    }

    /// `GET myOrganization/users`
    pub async fn list_users(&self) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Get, "myOrganization/users"))
            .await
    }

    /// `GET myOrganization/users?$filter={filter}`
    pub async fn list_users_filtered(&self, filter: &str) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Get, "myOrganization/users").query("$filter", filter))
            .await
    }

    /// `POST myOrganization/users`
    pub async fn create_user(&self, body: RequestBody) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Post, "myOrganization/users").body(body))
            .await
    }
}
