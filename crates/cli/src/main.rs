//! Bazaar CLI - catalog maintenance and search tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate a catalog file
//! bazaar-cli check --catalog crates/storefront/data/catalog.json
//!
//! # Search the catalog and print one page with its pagination strip
//! bazaar-cli search --term red --page 2 --per-page 5
//!
//! # Browse a category with an empty term
//! bazaar-cli search --category hats
//! ```
//!
//! # Commands
//!
//! - `check` - Load and validate a catalog
//! - `search` - Filter and page a catalog like the shop does

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

/// Catalog used when `--catalog` is not given.
const DEFAULT_CATALOG: &str = "crates/storefront/data/catalog.json";

#[derive(Parser)]
#[command(name = "bazaar-cli")]
#[command(author, version, about = "Bazaar CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a catalog file
    Check {
        /// Catalog JSON document
        #[arg(short, long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,
    },
    /// Filter and page a catalog
    Search {
        /// Catalog JSON document
        #[arg(short, long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,

        /// Search term (case-insensitive substring of the product name)
        #[arg(short, long, default_value = "")]
        term: String,

        /// Category slug to restrict the search to
        #[arg(long)]
        category: Option<String>,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Products per page
        #[arg(long, default_value_t = 12)]
        per_page: usize,

        /// Show nothing when the term is empty instead of listing everything
        #[arg(long)]
        hide_on_empty: bool,

        /// Print the pagination strip even when there is only one page
        #[arg(long)]
        show_single_page: bool,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bazaar_cli=info,bazaar_storefront=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check { catalog } => commands::check::run(&catalog)?,
        Commands::Search {
            catalog,
            term,
            category,
            page,
            per_page,
            hide_on_empty,
            show_single_page,
        } => commands::search::run(&commands::search::SearchArgs {
            catalog,
            term,
            category,
            page,
            per_page,
            hide_on_empty,
            show_single_page,
        })?,
    }
    Ok(())
}
