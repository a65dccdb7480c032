//! OneDrive endpoints.
//!
//! Paths keep the original service shapes, including the trailing slash on
//! item delete/rename.

use std::sync::Arc;

use super::ItemId;
use crate::graph::{ApiResponse, GraphRequest, GraphTransport, RequestBody, TransportError, Verb};

/// Handle for drive and drive-item operations.
pub struct DrivesService {
    transport: Arc<dyn GraphTransport>,
}

impl DrivesService {
    pub(super) fn new(transport: Arc<dyn GraphTransport>) -> Self {
        Self { transport }
    }

    /// `GET me/drive`
    pub async fn get_drive(&self) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Get, "me/drive"))
            .await
    }

    /// `GET myOrganization/drives`
    pub async fn list_organization_drives(&self) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Get, "myOrganization/drives"))
            .await
    }

    /// `GET me/drive/root/children`
    pub async fn list_root_children(&self) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Get, "me/drive/root/children"))
            .await
    }

    /// `PUT me/drive/root/children/{name}/content`
    pub async fn upload_file(
        &self,
        name: &str,
        body: RequestBody,
    ) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(
                GraphRequest::new(Verb::Put, format!("me/drive/root/children/{name}/content"))
                    .body(body),
            )
            .await
    }

    /// `GET me/drive/items/{id}/content`
    pub async fn download_file(&self, id: &ItemId) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(
                Verb::Get,
                format!("me/drive/items/{id}/content"),
            ))
            .await
    }

    /// `PUT me/drive/items/{id}/content`
    pub async fn update_file(
        &self,
        id: &ItemId,
        body: RequestBody,
    ) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Put, format!("me/drive/items/{id}/content")).body(body))
            .await
    }

    /// `DELETE me/drive/items/{id}/`
    pub async fn delete_file(&self, id: &ItemId) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(
                Verb::Delete,
                format!("me/drive/items/{id}/"),
            ))
            .await
    }

    /// `PATCH me/drive/items/{id}/`
    pub async fn rename_file(
        &self,
        id: &ItemId,
        body: RequestBody,
    ) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Patch, format!("me/drive/items/{id}/")).body(body))
            .await
    }

    /// `POST me/drive/root/children`
    pub async fn create_folder(&self, body: RequestBody) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Post, "me/drive/root/children").body(body))
            .await
    }
}
