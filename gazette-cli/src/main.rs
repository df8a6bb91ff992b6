//! # gazette CLI
//!
//! Command-line interface for querying a gazette blog: listings, featured
//! articles, search suggestions and tags.

mod agent;
mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gazette")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "gazette.yml", env = "GAZETTE_CONFIG")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every page with its classification
    Pages {
        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// List articles, newest first
    Articles {
        /// Only articles carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Show featured articles followed by the other articles
    Featured {
        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Search page titles and section headers
    Search {
        /// Search query
        query: String,

        /// Maximum results to return (0 = unlimited, defaults to config)
        #[arg(long)]
        limit: Option<usize>,

        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Pick random related articles for a page
    Related {
        /// Page path (e.g. /articles/rust-basics.html)
        path: String,

        /// Number of articles to pick
        #[arg(long, default_value_t = 3)]
        count: usize,

        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// List tags by article count
    Tags {
        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Print a configuration value by dotted key
    Config {
        /// Key such as site.title or search.max_suggestions
        key: String,
    },

    /// Fetch a single page in structured form
    Show {
        /// Page path (e.g. /cv/)
        path: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = ShowFormat::Json)]
        format: ShowFormat,
    },
}

#[derive(Copy, Clone, ValueEnum)]
pub enum ShowFormat {
    Json,
    Frontmatter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Pages { json } => commands::list_pages(&cli.config, json),
        Commands::Articles { tag, json } => {
            commands::list_articles(&cli.config, tag.as_deref(), json)
        }
        Commands::Featured { json } => commands::list_featured(&cli.config, json),
        Commands::Search { query, limit, json } => {
            commands::search_site(&cli.config, &query, limit, json)
        }
        Commands::Related { path, count, json } => {
            commands::related_articles(&cli.config, &path, count, json)
        }
        Commands::Tags { json } => commands::list_tags(&cli.config, json),
        Commands::Config { key } => commands::config_value(&cli.config, &key),
        Commands::Show { path, format } => commands::show_page(&cli.config, &path, format),
    }
}
