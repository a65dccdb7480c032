//! Sample request-body builders.
//!
//! Field casing follows the wire format of each resource family: PascalCase
//! for Outlook entities (messages, events), camelCase for directory objects
//! (users, groups, drive items).

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

const MAIL_SUBJECT: &str = "Sent from the graphbook sample";
const MAIL_BODY: &str = "This message was sent from the graphbook snippet catalog.";

/// Body for `me/sendMail`. An empty recipient address is sent as-is; the
/// request then fails remotely rather than locally.
pub fn send_mail(recipient: &str) -> Value {
    json!({
        "Message": {
            "Subject": MAIL_SUBJECT,
            "Body": {
                "ContentType": "Text",
                "Content": MAIL_BODY
            },
            "ToRecipients": [
                { "EmailAddress": { "Address": recipient } }
            ]
        },
        "SaveToSentItems": true
    })
}

/// Body for creating a calendar event: starts now, ends in one hour.
pub fn event() -> Value {
    let start = Utc::now();
    let end = start + chrono::Duration::hours(1);
    json!({
        "Subject": "Office 365 unified API discussion",
        "Start": {
            "DateTime": start.to_rfc3339_opts(SecondsFormat::Secs, true),
            "TimeZone": "UTC"
        },
        "End": {
            "DateTime": end.to_rfc3339_opts(SecondsFormat::Secs, true),
            "TimeZone": "UTC"
        },
        "Location": { "DisplayName": "Bill's office" },
        "Attendees": [
            {
                "Type": "Required",
                "EmailAddress": { "Address": "mara@fabrikam.com" }
            }
        ],
        "Body": {
            "Content": "Let's discuss the power of the Office 365 unified API.",
            "ContentType": "Text"
        }
    })
}

/// Body for renaming a drive item to a fresh random name.
pub fn rename_file() -> Value {
    json!({ "name": Uuid::new_v4().to_string() })
}

/// Body for creating a folder under the drive root.
pub fn folder() -> Value {
    json!({
        "name": Uuid::new_v4().to_string(),
        "folder": {},
        "@name.conflictBehavior": "rename"
    })
}

/// Body for creating a directory user in the given tenant domain.
pub fn user(tenant_domain: &str) -> Value {
    let nickname = Uuid::new_v4().to_string();
    json!({
        "accountEnabled": true,
        "displayName": &nickname,
        "mailNickname": &nickname,
        "passwordProfile": {
            "password": "P@ssw0rd!",
            "forceChangePasswordNextSignIn": false
        },
        "userPrincipalName": format!("{nickname}@{tenant_domain}")
    })
}

/// Body for creating a unified group.
pub fn group() -> Value {
    let nickname = Uuid::new_v4().to_string();
    json!({
        "description": "Group created by the graphbook sample",
        "displayName": &nickname,
        "groupTypes": ["Unified"],
        "mailEnabled": true,
        "mailNickname": &nickname,
        "securityEnabled": false
    })
}

/// Body for updating a group's description.
pub fn group_update() -> Value {
    json!({ "description": "Group updated by the graphbook sample" })
}
