//! The snippet catalog.
//!
//! A snippet is one sample Graph operation bundled with its display text; a
//! category groups the snippets that share one service handle. The catalog
//! is the ordered, flattened sequence of every category header followed by
//! that category's snippets, built once at startup and immutable afterwards.

mod drives;
mod events;
mod groups;
mod mail;
mod me;
pub mod operation;
pub mod payloads;
mod users;

pub use operation::{Operation, SnippetError, SnippetResult};

/// Errors from resolving a catalog selector.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("position {0} is out of range")]
    OutOfRange(usize),

    #[error("position {0} is a section header, not a runnable snippet")]
    Header(usize),

    #[error("no snippet named {0:?}")]
    UnknownName(String),
}

/// Snippet grouping by target resource area. Order here is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mail,
    Events,
    Drives,
    Users,
    Groups,
    Me,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Mail,
        Category::Events,
        Category::Drives,
        Category::Users,
        Category::Groups,
        Category::Me,
    ];

    /// Section title rendered for this category's header entry.
    pub fn section_label(&self) -> &'static str {
        match self {
            Category::Mail => "Mail",
            Category::Events => "Events",
            Category::Drives => "Drives",
            Category::Users => "Users",
            Category::Groups => "Groups",
            Category::Me => "Me",
        }
    }

    fn snippets(&self) -> Vec<Snippet> {
        match self {
            Category::Mail => mail::snippets(),
            Category::Events => events::snippets(),
            Category::Drives => drives::snippets(),
            Category::Users => users::snippets(),
            Category::Groups => groups::snippets(),
            Category::Me => me::snippets(),
        }
    }
}

/// One sample API operation with its display text.
#[derive(Debug, Clone)]
pub struct Snippet {
    pub name: &'static str,
    pub description: &'static str,
    /// Link to the reference documentation for the underlying endpoint.
    pub docs_url: Option<&'static str>,
    /// Whether the operation needs an admin-consented token.
    pub admin_required: bool,
    pub category: Category,
    pub operation: Operation,
}

/// One position in the flattened catalog: either a category's section
/// header or a runnable snippet.
#[derive(Debug, Clone)]
pub enum CatalogEntry {
    Header(Category),
    Snippet(Snippet),
}

impl CatalogEntry {
    pub fn title(&self) -> &str {
        match self {
            CatalogEntry::Header(category) => category.section_label(),
            CatalogEntry::Snippet(snippet) => snippet.name,
        }
    }

    /// `None` for header entries; headers are never executable.
    pub fn description(&self) -> Option<&str> {
        match self {
            CatalogEntry::Header(_) => None,
            CatalogEntry::Snippet(snippet) => Some(snippet.description),
        }
    }

    pub fn is_header(&self) -> bool {
        self.description().is_none()
    }

    pub fn snippet(&self) -> Option<&Snippet> {
        match self {
            CatalogEntry::Header(_) => None,
            CatalogEntry::Snippet(snippet) => Some(snippet),
        }
    }
}

/// Ordered registry of every category and snippet, flattened for list
/// rendering.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds the full catalog: per category, one header entry followed by
    /// that category's snippets.
    pub fn build() -> Self {
        let mut entries = Vec::new();
        for category in Category::ALL {
            entries.push(CatalogEntry::Header(category));
            entries.extend(category.snippets().into_iter().map(CatalogEntry::Snippet));
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(position)
    }

    /// True when the entry at `position` is a section header (it carries no
    /// description). Out-of-range positions are not headers.
    pub fn is_header(&self, position: usize) -> bool {
        self.entries
            .get(position)
            .is_some_and(|entry| entry.description().is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Resolves a snippet by flattened position or case-insensitive name.
    /// Header positions are refused; they are never executable.
    pub fn resolve(&self, selector: &str) -> Result<(usize, &Snippet), ResolveError> {
        if let Ok(position) = selector.parse::<usize>() {
            let entry = self
                .get(position)
                .ok_or(ResolveError::OutOfRange(position))?;
            return entry
                .snippet()
                .map(|snippet| (position, snippet))
                .ok_or(ResolveError::Header(position));
        }
        self.find(selector)
            .ok_or_else(|| ResolveError::UnknownName(selector.to_string()))
    }

    /// Resolves a snippet by case-insensitive exact name.
    pub fn find(&self, name: &str) -> Option<(usize, &Snippet)> {
        self.entries.iter().enumerate().find_map(|(position, entry)| {
            entry
                .snippet()
                .filter(|snippet| snippet.name.eq_ignore_ascii_case(name))
                .map(|snippet| (position, snippet))
        })
    }
}
