//! Mailbox endpoints for the signed-in user.

use std::sync::Arc;

use crate::graph::{ApiResponse, GraphRequest, GraphTransport, RequestBody, TransportError, Verb};

/// Handle for mail operations.
pub struct MailService {
    transport: Arc<dyn GraphTransport>,
}

impl MailService {
    pub(super) fn new(transport: Arc<dyn GraphTransport>) -> Self {
        Self { transport }
    }

    /// `GET me/messages`
    pub async fn list_messages(&self) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Get, "me/messages"))
            .await
    }

    /// `POST me/sendMail`
    pub async fn send_mail(&self, body: RequestBody) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(GraphRequest::new(Verb::Post, "me/sendMail").body(body))
            .await
    }
}
