//! Calendar event snippets.

use super::operation::Operation;
use super::{Category, Snippet};

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet {
            name: "Get my events",
            description: "Gets all events on the signed-in user's calendar.",
            docs_url: Some(
                "https://graph.microsoft.io/docs/api-reference/v1.0/api/user_list_events",
            ),
            admin_required: false,
            category: Category::Events,
            operation: Operation::ListEvents,
        },
        Snippet {
            name: "Create an event",
            description: "Adds an event to the signed-in user's calendar.",
            docs_url: Some(
                "https://graph.microsoft.io/docs/api-reference/v1.0/api/user_post_events",
            ),
            admin_required: false,
            category: Category::Events,
            operation: Operation::CreateEvent,
        },
        Snippet {
            name: "Update an event",
            description: "Creates an event, then changes its subject.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/event_update"),
            admin_required: false,
            category: Category::Events,
            operation: Operation::UpdateEvent,
        },
        Snippet {
            name: "Delete an event",
            description: "Creates an event, then deletes it.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/event_delete"),
            admin_required: false,
            category: Category::Events,
            operation: Operation::DeleteEvent,
        },
    ]
}
