//! Drive and drive-item snippets.

use super::operation::Operation;
use super::{Category, Snippet};

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet {
            name: "Get my drive",
            description: "Gets the signed-in user's drive.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/drive_get"),
            admin_required: false,
            category: Category::Drives,
            operation: Operation::GetDrive,
        },
        Snippet {
            name: "Get organization drives",
            description: "Gets all of the drives in the tenant.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/drive_get"),
            admin_required: false,
            category: Category::Drives,
            operation: Operation::ListOrganizationDrives,
        },
        Snippet {
            name: "Get my files",
            description: "Lists the files under the signed-in user's drive root.",
            docs_url: Some(
                "https://graph.microsoft.io/docs/api-reference/v1.0/api/item_list_children",
            ),
            admin_required: false,
            category: Category::Drives,
            operation: Operation::ListRootChildren,
        },
        Snippet {
            name: "Create a file",
            description: "Creates a file with a random name under the drive root.",
            docs_url: Some(
                "https://graph.microsoft.io/docs/api-reference/v1.0/api/item_post_children",
            ),
            admin_required: false,
            category: Category::Drives,
            operation: Operation::CreateFile,
        },
        Snippet {
            name: "Download a file",
            description: "Creates a file, then downloads its content.",
            docs_url: Some(
                "https://graph.microsoft.io/docs/api-reference/v1.0/api/item_downloadcontent",
            ),
            admin_required: false,
            category: Category::Drives,
            operation: Operation::DownloadFile,
        },
        Snippet {
            name: "Update a file",
            description: "Creates a file, then replaces its content.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/item_update"),
            admin_required: false,
            category: Category::Drives,
            operation: Operation::UpdateFile,
        },
        Snippet {
            name: "Delete a file",
            description: "Creates a file, then deletes it.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/item_delete"),
            admin_required: false,
            category: Category::Drives,
            operation: Operation::DeleteFile,
        },
        Snippet {
            name: "Rename a file",
            description: "Creates a file, then renames it.",
            docs_url: Some("https://graph.microsoft.io/docs/api-reference/v1.0/api/item_update"),
            admin_required: false,
            category: Category::Drives,
            operation: Operation::RenameFile,
        },
        Snippet {
            name: "Create a folder",
            description: "Creates a folder with a random name under the drive root.",
            docs_url: Some(
                "https://graph.microsoft.io/docs/api-reference/v1.0/api/item_post_children",
            ),
            admin_required: false,
            category: Category::Drives,
            operation: Operation::CreateFolder,
        },
    ]
}
