//! Directory user snippets.

use super::operation::Operation;
use super::{Category, Snippet};

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet {
            name: "Get users",
            description: "Gets the users in the tenant.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/user_list"),
            admin_required: false,
            category: Category::Users,
            operation: Operation::ListUsers,
        },
        Snippet {
            name: "Get filtered users",
            description: "Gets the tenant users whose accounts are enabled.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/user_list"),
            admin_required: false,
            category: Category::Users,
            operation: Operation::ListFilteredUsers,
        },
        Snippet {
            name: "Create a new user",
            description: "Adds a user account to the tenant directory.",
            docs_url: Some(
                "https://graph.microsoft.io/docs/api-reference/v1.0/api/user_post_users",
            ),
            admin_required: true,
            category: Category::Users,
            operation: Operation::CreateUser,
        },
    ]
}
