//! Skycast CLI, the main entry point.
//!
//! Commands:
//! - `weather`     Current conditions for a place
//! - `activities`  Forecast bundle for activity recommendations
//! - `agent`       Chat with the weather or activities agent
//! - `agents`      List the built-in agents
//! - `tools`       Print the tool definitions sent to the model
//! - `config`      Show the effective configuration

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use skycast_config::{AppConfig, ConfigError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use skycast_weather::ActivityType;

mod commands;

#[derive(Parser)]
#[command(
    name = "skycast",
    about = "Skycast: weather lookups and activity ideas, with or without an agent",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read configuration from this file instead of ~/.skycast/config.toml
    #[arg(long, global = true, env = "SKYCAST_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current weather for a location
    Weather {
        /// City name
        location: String,
    },

    /// Fetch the forecast bundle used for activity recommendations
    Activities {
        /// City or location name
        location: String,

        /// Activity category (e.g. outdoor_recreation, dining)
        #[arg(short = 't', long = "type")]
        activity_type: ActivityType,

        /// Only this forecast day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Number of recommendations requested (1-10)
        #[arg(short = 'n', long)]
        max_results: Option<i64>,
    },

    /// Chat with an agent
    Agent {
        /// Which agent to talk to
        #[arg(long, default_value = "weather")]
        name: String,

        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,
    },

    /// List the built-in agents
    Agents,

    /// Print tool definitions as JSON
    Tools,

    /// Show the effective configuration (secrets redacted)
    Config,
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Load the config under a temporary subscriber, since the configured one
/// depends on what gets loaded.
fn load_config<W>(path: &Path, verbose: bool, writer: W) -> Result<AppConfig, ConfigError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter(if verbose { "debug" } else { "info" }))
        .with_target(false)
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(bootstrap, || AppConfig::load_with_env(path))
}

fn init_tracing(verbose: bool, config: &AppConfig) {
    let default_filter = if verbose { "debug" } else { config.logging.level.as_str() };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(false)
        .with_writer(std::io::stderr);
    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::default_path);
    let config = load_config(&config_path, cli.verbose, std::io::stderr)
        .map_err(|e| format!("Failed to load config: {e}"))?;
    init_tracing(cli.verbose, &config);
    tracing::debug!(
        path = %config_path.display(),
        provider = %config.default_provider,
        model = %config.default_model,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Weather { location } => commands::weather::run(&config, location).await?,
        Commands::Activities {
            location,
            activity_type,
            date,
            max_results,
        } => commands::activities::run(&config, location, activity_type, date, max_results).await?,
        Commands::Agent { name, message } => commands::agent::run(&config, &name, message).await?,
        Commands::Agents => commands::agents::run(&config)?,
        Commands::Tools => commands::tools::run(&config)?,
        Commands::Config => commands::config_cmd::show(&config, &config_path)?,
    }

    Ok(())
}
