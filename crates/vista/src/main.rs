//! Vista CLI - Multi-provider stock-photo search for the terminal.
//!
//! Vista queries Unsplash and Getty Images for a city and its attractions,
//! merges and filters the results, and lets the user page through them and
//! pick one image per topic.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (city / attraction / second attraction)
//! vista explore
//!
//! # One-shot query, printed as a table or JSON
//! vista search "Paris Louvre" --orientation landscape
//!
//! # View configuration
//! vista config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Vista - Multi-provider stock-photo search for the terminal.
#[derive(Parser, Debug)]
#[command(name = "vista")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive city/attraction image exploration
    Explore,

    /// Run a single query and print the merged results
    Search(cli::search::SearchArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match vista_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `vista config path`."
            );
            vista_core::Config::default()
        }
    };
    logging::init(&config.logging, cli.verbose, cli.json_logs);

    tracing::debug!("Vista v{}", vista_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Explore => cli::explore::execute(&config).await,
        Commands::Search(args) => cli::search::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
