//! graphbook - a runnable catalog of Microsoft Graph REST snippets
//!
//! This crate provides the snippet catalog, the per-category service
//! handles, and the transport seam they execute against. The companion
//! binary renders the catalog and runs individual snippets from the
//! terminal.

pub mod catalog;
pub mod config;
pub mod graph;
pub mod render;
pub mod services;

pub use catalog::{
    Catalog, CatalogEntry, Category, ResolveError, Snippet, SnippetError, SnippetResult,
};
pub use config::Settings;
pub use services::Services;
