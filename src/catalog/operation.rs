//! Snippet dispatch.
//!
//! Every runnable snippet is one [`Operation`] variant. Single-step
//! operations issue exactly one request; two-step operations create a
//! resource and, only when that first request succeeds, act on the resource
//! they just created. A step-1 failure fails the whole operation and step 2
//! is never attempted; this includes the case where the created resource's
//! identifier cannot be extracted from the step-1 body.

use serde_json::json;
use uuid::Uuid;

use super::payloads;
use super::Snippet;
use crate::config::DemoSettings;
use crate::graph::{ApiResponse, RequestBody, TransportError};
use crate::services::{ItemId, Services};

/// Errors surfaced to the caller of [`Snippet::execute`].
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    /// No usable HTTP response was obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A response was obtained but carried a non-success status. The full
    /// response is kept so the caller can still render status, headers, and
    /// the error body.
    #[error("request failed with HTTP {}", .response.status)]
    Status { response: Box<ApiResponse> },

    /// A step-1 body was expected to be JSON but did not parse.
    #[error("response body was not valid JSON: {0}")]
    Malformed(String),

    /// A step-1 body parsed but carried no identifier field.
    #[error("response JSON has no {field:?} field")]
    MissingField { field: &'static str },
}

pub type SnippetResult = Result<ApiResponse, SnippetError>;

/// The request logic behind one runnable snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    // Mail
    ListMessages,
    SendMessage,
    // Events
    ListEvents,
    CreateEvent,
    UpdateEvent,
    DeleteEvent,
    // Drives
    GetDrive,
    ListOrganizationDrives,
    ListRootChildren,
    CreateFile,
    DownloadFile,
    UpdateFile,
    DeleteFile,
    RenameFile,
    CreateFolder,
    // Users
    ListUsers,
    ListFilteredUsers,
    CreateUser,
    // Groups
    ListGroups,
    CreateGroup,
    UpdateGroup,
    DeleteGroup,
    // Me
    GetMe,
    GetResponsibilities,
    GetManager,
    GetDirectReports,
    GetMemberships,
    GetPhoto,
}

impl Snippet {
    /// Executes this snippet against the shared service handles.
    ///
    /// A success is a 2xx response from the operation's final step.
    pub async fn execute(&self, services: &Services, demo: &DemoSettings) -> SnippetResult {
        tracing::info!(snippet = self.name, "executing snippet");
        self.operation.run(services, demo).await
    }
}

impl Operation {
    pub async fn run(&self, services: &Services, demo: &DemoSettings) -> SnippetResult {
        match self {
            // Mail
            Operation::ListMessages => gate(services.mail().list_messages().await?),
            Operation::SendMessage => {
                let recipient = demo.send_mail_recipient.clone().unwrap_or_default();
                let body = payloads::send_mail(&recipient);
                gate(services.mail().send_mail(RequestBody::json(&body)).await?)
            }

            // Events
            Operation::ListEvents => gate(services.events().list_events().await?),
            Operation::CreateEvent => {
                let body = RequestBody::json(&payloads::event());
                gate(services.events().create_event(body).await?)
            }
            Operation::UpdateEvent => {
                let mut event = payloads::event();
                let created = gate(
                    services
                        .events()
                        .create_event(RequestBody::json(&event))
                        .await?,
                )?;
                let id = extract_id(&created, "Id")?;
                event["Subject"] = json!("Sync of the Week");
                gate(
                    services
                        .events()
                        .update_event(&id, RequestBody::json(&event))
                        .await?,
                )
            }
            Operation::DeleteEvent => {
                let body = RequestBody::json(&payloads::event());
                let created = gate(services.events().create_event(body).await?)?;
                let id = extract_id(&created, "Id")?;
                gate(services.events().delete_event(&id).await?)
            }

            // Drives
            Operation::GetDrive => gate(services.drives().get_drive().await?),
            Operation::ListOrganizationDrives => {
                gate(services.drives().list_organization_drives().await?)
            }
            Operation::ListRootChildren => gate(services.drives().list_root_children().await?),
            Operation::CreateFile => {
                let name = Uuid::new_v4().to_string();
                gate(
                    services
                        .drives()
                        .upload_file(&name, RequestBody::text("file contents"))
                        .await?,
                )
            }
            Operation::DownloadFile => {
                let id = create_sample_file(services).await?;
                gate(services.drives().download_file(&id).await?)
            }
            Operation::UpdateFile => {
                let id = create_sample_file(services).await?;
                gate(
                    services
                        .drives()
                        .update_file(&id, RequestBody::text("Updated file contents"))
                        .await?,
                )
            }
            Operation::DeleteFile => {
                let id = create_sample_file(services).await?;
                gate(services.drives().delete_file(&id).await?)
            }
            Operation::RenameFile => {
                let id = create_sample_file(services).await?;
                let body = RequestBody::json(&payloads::rename_file());
                gate(services.drives().rename_file(&id, body).await?)
            }
            Operation::CreateFolder => {
                let body = RequestBody::json(&payloads::folder());
                gate(services.drives().create_folder(body).await?)
            }

            // Users
            Operation::ListUsers => gate(services.users().list_users().await?),
            Operation::ListFilteredUsers => {
                gate(
                    services
                        .users()
                        .list_users_filtered("accountEnabled eq true")
                        .await?,
                )
            }
            Operation::CreateUser => {
                let body = RequestBody::json(&payloads::user(&demo.tenant_domain));
                gate(services.users().create_user(body).await?)
            }

            // Groups
            Operation::ListGroups => gate(services.groups().list_groups().await?),
            Operation::CreateGroup => {
                let body = RequestBody::json(&payloads::group());
                gate(services.groups().create_group(body).await?)
            }
            Operation::UpdateGroup => {
                let created = create_sample_group(services).await?;
                let body = RequestBody::json(&payloads::group_update());
                gate(services.groups().update_group(&created, body).await?)
            }
            Operation::DeleteGroup => {
                let created = create_sample_group(services).await?;
                gate(services.groups().delete_group(&created).await?)
            }

            // Me
            Operation::GetMe => gate(services.me().get_me().await?),
            Operation::GetResponsibilities => gate(services.me().get_me_selected().await?),
            Operation::GetManager => gate(services.me().entity("manager").await?),
            Operation::GetDirectReports => gate(services.me().entity("directReports").await?),
            Operation::GetMemberships => gate(services.me().entity("memberOf").await?),
            Operation::GetPhoto => gate(services.me().entity("userPhoto").await?),
        }
    }
}

/// Success gate applied to every step: a non-2xx response becomes an error
/// carrying the full response.
fn gate(response: ApiResponse) -> SnippetResult {
    if response.is_success() {
        Ok(response)
    } else {
        Err(SnippetError::Status {
            response: Box::new(response),
        })
    }
}

/// Reads the identifier of a just-created resource from a step-1 body.
fn extract_id(response: &ApiResponse, field: &'static str) -> Result<ItemId, SnippetError> {
    let value = response
        .json()
        .map_err(|e| SnippetError::Malformed(e.to_string()))?;
    value
        .get(field)
        .and_then(|id| id.as_str())
        .map(|id| ItemId(id.to_string()))
        .ok_or(SnippetError::MissingField { field })
}

/// Step 1 of the drive-item snippets: upload a file with a random name and
/// return its identifier.
async fn create_sample_file(services: &Services) -> Result<ItemId, SnippetError> {
    let name = Uuid::new_v4().to_string();
    let created = gate(
        services
            .drives()
            .upload_file(&name, RequestBody::text("file contents"))
            .await?,
    )?;
    extract_id(&created, "id")
}

/// Step 1 of the group mutation snippets: create a group and return its
/// identifier.
async fn create_sample_group(services: &Services) -> Result<ItemId, SnippetError> {
    let created = gate(
        services
            .groups()
            .create_group(RequestBody::json(&payloads::group()))
            .await?,
    )?;
    extract_id(&created, "id")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphRequest, MockGraphTransport, Verb};
    use mockall::Sequence;
    use std::sync::Arc;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            url: "https://graph.microsoft.com/v1.0/test".to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    fn services(mock: MockGraphTransport) -> Services {
        Services::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn single_step_snippet_issues_exactly_one_request() {
        let mut mock = MockGraphTransport::new();
        mock.expect_send()
            .withf(|request: &GraphRequest| {
                request.verb == Verb::Get && request.path == "me/messages"
            })
            .times(1)
            .returning(|_| Ok(response(200, "{}")));

        let result = Operation::ListMessages
            .run(&services(mock), &DemoSettings::default())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_becomes_status_error() {
        let mut mock = MockGraphTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(response(500, "server error")));

        let result = Operation::ListUsers
            .run(&services(mock), &DemoSettings::default())
            .await;
        match result {
            Err(SnippetError::Status { response }) => assert_eq!(response.status, 500),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn download_file_chains_the_created_item_id() {
        let mut mock = MockGraphTransport::new();
        let mut seq = Sequence::new();
        mock.expect_send()
            .withf(|request: &GraphRequest| {
                request.verb == Verb::Put
                    && request.path.starts_with("me/drive/root/children/")
                    && request.path.ends_with("/content")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(201, r#"{"id":"abc123"}"#)));
        mock.expect_send()
            .withf(|request: &GraphRequest| {
                request.verb == Verb::Get && request.path == "me/drive/items/abc123/content"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(200, "file contents")));

        let result = Operation::DownloadFile
            .run(&services(mock), &DemoSettings::default())
            .await;
        assert_eq!(result.unwrap().status, 200);
    }

    #[tokio::test]
    async fn failed_first_step_skips_the_second() {
        let mut mock = MockGraphTransport::new();
        mock.expect_send()
            .withf(|request: &GraphRequest| request.verb == Verb::Put)
            .times(1)
            .returning(|_| Ok(response(403, r#"{"error":{"code":"accessDenied"}}"#)));

        let result = Operation::DownloadFile
            .run(&services(mock), &DemoSettings::default())
            .await;
        match result {
            Err(SnippetError::Status { response }) => assert_eq!(response.status, 403),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparseable_first_step_body_fails_the_operation() {
        let mut mock = MockGraphTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(response(201, "<html>not json</html>")));

        let result = Operation::DeleteFile
            .run(&services(mock), &DemoSettings::default())
            .await;
        assert!(matches!(result, Err(SnippetError::Malformed(_))));
    }

    #[tokio::test]
    async fn missing_id_field_fails_the_operation() {
        let mut mock = MockGraphTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(response(201, r#"{"name":"report.txt"}"#)));

        let result = Operation::RenameFile
            .run(&services(mock), &DemoSettings::default())
            .await;
        assert!(matches!(
            result,
            Err(SnippetError::MissingField { field: "id" })
        ));
    }

    #[tokio::test]
    async fn event_snippets_read_the_pascal_case_id() {
        let mut mock = MockGraphTransport::new();
        let mut seq = Sequence::new();
        mock.expect_send()
            .withf(|request: &GraphRequest| {
                request.verb == Verb::Post && request.path == "me/events"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(201, r#"{"Id":"evt42"}"#)));
        mock.expect_send()
            .withf(|request: &GraphRequest| {
                request.verb == Verb::Delete && request.path == "me/events/evt42"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(204, "")));

        let result = Operation::DeleteEvent
            .run(&services(mock), &DemoSettings::default())
            .await;
        assert_eq!(result.unwrap().status, 204);
    }

    #[tokio::test]
    async fn update_event_rewrites_the_subject() {
        let mut mock = MockGraphTransport::new();
        let mut seq = Sequence::new();
        mock.expect_send()
            .withf(|request: &GraphRequest| request.verb == Verb::Post)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(201, r#"{"Id":"evt42"}"#)));
        mock.expect_send()
            .withf(|request: &GraphRequest| {
                request.verb == Verb::Patch
                    && request.path == "me/events/evt42"
                    && request
                        .body
                        .as_ref()
                        .is_some_and(|body| body.content.contains("Sync of the Week"))
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(200, "{}")));

        let result = Operation::UpdateEvent
            .run(&services(mock), &DemoSettings::default())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn send_message_degrades_to_an_empty_recipient() {
        let mut mock = MockGraphTransport::new();
        mock.expect_send()
            .withf(|request: &GraphRequest| {
                request.path == "me/sendMail"
                    && request
                        .body
                        .as_ref()
                        .is_some_and(|body| body.content.contains(r#""Address":"""#))
            })
            .times(1)
            .returning(|_| Ok(response(400, r#"{"error":{"code":"invalidRecipients"}}"#)));

        let result = Operation::SendMessage
            .run(&services(mock), &DemoSettings::default())
            .await;
        assert!(matches!(result, Err(SnippetError::Status { .. })));
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let mut mock = MockGraphTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Err(TransportError::Body("connection reset".to_string())));

        let result = Operation::GetMe
            .run(&services(mock), &DemoSettings::default())
            .await;
        assert!(matches!(result, Err(SnippetError::Transport(_))));
    }
}
