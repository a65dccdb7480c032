//! graphbook - terminal front end for the snippet catalog

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use graphbook::catalog::{Catalog, CatalogEntry, Snippet, SnippetError};
use graphbook::config::Settings;
use graphbook::graph::{ApiResponse, ApiVersion, EnvTokenProvider, GraphClient};
use graphbook::render::{format_body, format_headers, StatusClass};
use graphbook::services::Services;

#[derive(Parser)]
#[command(name = "graphbook")]
#[command(about = "Browse and run Microsoft Graph sample requests")]
#[command(version)]
struct Cli {
    /// Override the Graph base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override the API version (v1.0 or beta)
    #[arg(long, global = true)]
    api_version: Option<ApiVersion>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List every snippet grouped by category
    List,

    /// Show a snippet's details without executing it
    Show {
        /// Snippet name or list position
        selector: String,
    },

    /// Execute a snippet and render its response
    Run {
        /// Snippet name or list position
        selector: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = Settings::load();
    if let Some(base_url) = cli.base_url {
        settings.graph.base_url = base_url;
    }
    if let Some(version) = cli.api_version {
        settings.graph.version = version;
    }

    let catalog = Catalog::build();
    match cli.command.unwrap_or(Command::List) {
        Command::List => list(&catalog),
        Command::Show { selector } => show(&catalog, &selector)?,
        Command::Run { selector } => run_snippet(&catalog, &selector, &settings).await?,
    }
    Ok(())
}

fn list(catalog: &Catalog) {
    for (position, entry) in catalog.iter().enumerate() {
        match entry {
            CatalogEntry::Header(category) => {
                println!();
                println!("{}", category.section_label().bold());
            }
            CatalogEntry::Snippet(snippet) => {
                let admin = if snippet.admin_required {
                    format!(" {}", "[admin]".red())
                } else {
                    String::new()
                };
                println!(
                    "  {}  {}{}",
                    format!("{position:>3}").dimmed(),
                    snippet.name,
                    admin
                );
                println!("       {}", snippet.description.dimmed());
            }
        }
    }
}

fn show(catalog: &Catalog, selector: &str) -> anyhow::Result<()> {
    let (_, snippet) = catalog.resolve(selector)?;
    println!("{}", snippet.name.bold());
    println!("Category: {}", snippet.category.section_label());
    println!("{}", snippet.description);
    if snippet.admin_required {
        println!("{}", "Requires an admin work account.".red());
    }
    if let Some(docs_url) = snippet.docs_url {
        println!("Docs: {}", docs_url.underline());
    }
    Ok(())
}

async fn run_snippet(catalog: &Catalog, selector: &str, settings: &Settings) -> anyhow::Result<()> {
    let (_, snippet) = catalog.resolve(selector)?;

    let token = Arc::new(EnvTokenProvider::new(settings.auth.token_env.clone()));
    let client =
        GraphClient::new(&settings.graph, token).context("failed to build the Graph client")?;
    let services = Services::new(Arc::new(client));

    match snippet.execute(&services, &settings.demo).await {
        Ok(response) => render_response(snippet, &response),
        Err(SnippetError::Status { response }) => render_response(snippet, &response),
        Err(e) => return Err(e).context(format!("snippet {:?} failed", snippet.name)),
    }
    Ok(())
}

fn render_response(snippet: &Snippet, response: &ApiResponse) {
    let status_line = format!("HTTP {}", response.status);
    match StatusClass::from_status(response.status) {
        StatusClass::Ok => println!("{}", status_line.green().bold()),
        StatusClass::Redirect => println!("{}", status_line.yellow().bold()),
        StatusClass::Error => println!("{}", status_line.red().bold()),
        StatusClass::Neutral => println!("{}", status_line.bold()),
    }
    println!("{}", response.url.dimmed());
    if let Some(docs_url) = snippet.docs_url {
        println!("Docs: {}", docs_url.underline());
    }
    println!();
    let headers = format_headers(&response.headers);
    if !headers.is_empty() {
        println!("{headers}");
        println!();
    }
    let body = format_body(&response.body);
    if !body.is_empty() {
        println!("{body}");
    }
}
