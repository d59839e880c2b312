//! Homework watcher CLI
//!
//! Polls the homework review API and forwards status changes to Telegram.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use homework_watcher::{
    config::check_startup,
    error::Result,
    models::Config,
    pipeline::{CycleOutcome, Poller},
};

/// homework-watcher - Homework review status notifier
#[derive(Parser, Debug)]
#[command(
    name = "homework-watcher",
    version,
    about = "Forwards homework review status changes to a Telegram chat"
)]
struct Cli {
    /// Path to the settings file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Poll forever (default)
    Run,

    /// Run a single poll cycle and exit
    Once,

    /// Validate settings and credentials without touching the network
    Check,
}

/// Initialize logging from the verbosity flag or configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, load_error) = Config::load_or_default(&cli.config);
    init_logging(cli.verbose, &config.logging.level);

    match load_error {
        None => log::info!("Loaded configuration from {}", cli.config.display()),
        Some(e) => log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        ),
    }

    match run(&cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, config: Config) -> Result<()> {
    let credentials = check_startup(&config)?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let mut poller = Poller::from_config(&config, &credentials)?;
            poller.run().await;
        }

        Command::Once => {
            let mut poller = Poller::from_config(&config, &credentials)?;
            match poller.run_cycle().await {
                CycleOutcome::NoChange => log::info!("No changes"),
                CycleOutcome::Notified(message) => log::info!("Notified: {}", message),
                CycleOutcome::Faulted { kind, cause } => {
                    log::warn!("Cycle faulted [{}]: {}", kind, cause)
                }
            }
            log::info!("Next from_date: {}", poller.state().watermark());
        }

        Command::Check => {
            log::info!("✓ Settings OK (endpoint {})", config.api.endpoint);
            log::info!("✓ Credentials OK (chat {})", credentials.telegram_chat_id);
        }
    }

    Ok(())
}
