//! Mail snippets.

use super::operation::Operation;
use super::{Category, Snippet};

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet {
            name: "Get my messages",
            description: "Gets the messages in the signed-in user's mailbox.",
            docs_url: Some(
                "https://graph.microsoft.io/docs/api-reference/v1.0/api/user_list_messages",
            ),
            admin_required: false,
            category: Category::Mail,
            operation: Operation::ListMessages,
        },
        Snippet {
            name: "Send an email message",
            description: "Sends an email message on behalf of the signed-in user.",
            docs_url: Some(
                "https://graph.microsoft.io/docs/api-reference/v1.0/api/user_post_messages",
            ),
            admin_required: false,
            category: Category::Mail,
            operation: Operation::SendMessage,
        },
    ]
}
