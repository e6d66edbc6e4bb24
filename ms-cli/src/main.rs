//! Mediasite CLI - Command-line interface for the Mediasite REST API.
//!
//! Browse folders, manage presentations and recorders, and maintain
//! recording schedules from the terminal. Useful for scripting and for
//! checking a server's configuration without the web console.

mod commands;

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::debug;

use ms_core::config::AppConfig;
use ms_core::error::MsResult;
use ms_core::logging;

/// Mediasite - presentation management from the command line.
#[derive(Parser)]
#[command(
    name = "mediasite",
    version,
    about = "Mediasite REST API client",
    long_about = "A command-line client for the Mediasite presentation platform.\n\
                  Reads the server endpoint and credentials from a TOML config file."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and create folders.
    Folders {
        #[command(subcommand)]
        action: commands::folders::FoldersAction,
    },
    /// Inspect, create and upload presentations.
    Presentations {
        #[command(subcommand)]
        action: commands::presentations::PresentationsAction,
    },
    /// List and control recorders.
    Recorders {
        #[command(subcommand)]
        action: commands::recorders::RecordersAction,
    },
    /// Manage recording schedules.
    Schedules {
        #[command(subcommand)]
        action: commands::schedules::SchedulesAction,
    },
    /// List presentation templates.
    Templates,
    /// List players.
    Players,
    /// Look up a catalog by exact name.
    Catalog {
        /// Catalog name.
        name: String,
    },
    /// Issue an authorization ticket for a resource.
    Ticket {
        /// Presentation or catalog id.
        resource_id: String,
        /// User the ticket is issued to.
        #[arg(short, long)]
        username: String,
        /// Ticket lifetime in minutes.
        #[arg(short, long, default_value = "60")]
        minutes: i32,
    },
}

#[tokio::main]
async fn main() -> MsResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from_file(Path::new(path))?,
        None => AppConfig::load_default()?,
    };

    // Initialize logging
    let log_dir = config
        .effective_log_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("logs"));
    let _guard = if cli.verbose {
        logging::init_logging("debug", &log_dir, config.logging.json_output)?
    } else {
        logging::init_from_config(&config.logging, &log_dir)?
    };

    debug!("Mediasite CLI v{}", ms_core::constants::APP_VERSION);

    let client = commands::create_client(&config)?;

    // Dispatch to command handlers
    match cli.command {
        Commands::Folders { action } => commands::folders::run(&client, action, cli.format).await,
        Commands::Presentations { action } => {
            commands::presentations::run(&client, action, cli.format).await
        }
        Commands::Recorders { action } => {
            commands::recorders::run(&client, action, cli.format).await
        }
        Commands::Schedules { action } => {
            commands::schedules::run(&client, action, cli.format).await
        }
        Commands::Templates => commands::catalog::templates(&client, cli.format).await,
        Commands::Players => commands::catalog::players(&client, cli.format).await,
        Commands::Catalog { name } => commands::catalog::find(&client, &name, cli.format).await,
        Commands::Ticket { resource_id, username, minutes } => {
            commands::catalog::ticket(&client, &resource_id, &username, minutes, cli.format).await
        }
    }
}
