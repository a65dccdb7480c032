//! Signed-in user profile snippets.

use super::operation::Operation;
use super::{Category, Snippet};

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet {
            name: "Get me",
            description: "Gets information about the signed-in user.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/user_get"),
            admin_required: false,
            category: Category::Me,
            operation: Operation::GetMe,
        },
        Snippet {
            name: "Get my responsibilities",
            description: "Gets the signed-in user's responsibilities, about-me text, and tags.",
            docs_url: None,
            admin_required: false,
            category: Category::Me,
            operation: Operation::GetResponsibilities,
        },
        Snippet {
            name: "Get my manager",
            description: "Gets the signed-in user's manager.",
            docs_url: None,
            admin_required: false,
            category: Category::Me,
            operation: Operation::GetManager,
        },
        Snippet {
            name: "Get my direct reports",
            description: "Gets the people who report to the signed-in user.",
            docs_url: None,
            admin_required: false,
            category: Category::Me,
            operation: Operation::GetDirectReports,
        },
        Snippet {
            name: "Get my group memberships",
            description: "Gets the groups the signed-in user is a member of.",
            docs_url: None,
            admin_required: false,
            category: Category::Me,
            operation: Operation::GetMemberships,
        },
        Snippet {
            name: "Get my photo",
            description: "Gets the signed-in user's photo.",
            docs_url: None,
            admin_required: false,
            category: Category::Me,
            operation: Operation::GetPhoto,
        },
    ]
}
