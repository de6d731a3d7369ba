//! Hive Image CLI - Catalog inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # List the product catalog
//! hi-cli catalog list
//!
//! # Export the catalog as JSON
//! hi-cli catalog export
//!
//! # Validate the markdown content pages
//! hi-cli content check
//!
//! # Ask the sales assistant a one-shot question (needs GEMINI_API_KEY)
//! hi-cli ask "Which laptop is best for video editing?"
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hi-cli")]
#[command(author, version, about = "Hive Image CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Validate markdown content
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Ask the sales assistant a one-shot question
    Ask {
        /// The question to ask
        question: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Print the catalog as a table
    List,
    /// Print the catalog as JSON
    Export,
}

#[derive(Subcommand)]
enum ContentAction {
    /// Load the content directory and report what it holds
    Check {
        /// Content directory
        #[arg(long, default_value = "crates/storefront/content")]
        dir: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Export => commands::catalog::export()?,
        },
        Commands::Content { action } => match action {
            ContentAction::Check { dir } => commands::content::check(&dir)?,
        },
        Commands::Ask { question } => commands::ask::ask(&question).await?,
    }
    Ok(())
}
