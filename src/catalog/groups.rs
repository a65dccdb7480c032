//! Directory group snippets.

use super::operation::Operation;
use super::{Category, Snippet};

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet {
            name: "Get all groups",
            description: "Gets the groups in the tenant.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/group_list"),
            admin_required: false,
            category: Category::Groups,
            operation: Operation::ListGroups,
        },
        Snippet {
            name: "Create a group",
            description: "Adds a unified group to the tenant directory.",
            docs_url: Some(
                "https://graph.microsoft.io/docs/api-reference/v1.0/api/group_post_groups",
            ),
            admin_required: true,
            category: Category::Groups,
            operation: Operation::CreateGroup,
        },
        Snippet {
            name: "Update a group",
            description: "Creates a group, then changes its description.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/group_update"),
            admin_required: true,
            category: Category::Groups,
            operation: Operation::UpdateGroup,
        },
        Snippet {
            name: "Delete a group",
            description: "Creates a group, then deletes it.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/group_delete"),
            admin_required: true,
            category: Category::Groups,
            operation: Operation::DeleteGroup,
        },
    ]
}
