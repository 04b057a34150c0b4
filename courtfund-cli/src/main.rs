mod commands;

use clap::{Parser, Subcommand};
use courtfund_core::{Catalog, ClientConfig, CourtfundError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "courtfund")]
#[command(about = "Courtfund - tournament fundraising platform client")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Language for localized output (overrides COURTFUND_LANG)
    #[arg(short, long, global = true)]
    language: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lottery status, participants, winners, and local draw simulation
    #[command(subcommand)]
    Lottery(commands::LotteryCommands),

    /// Create or simulate payments
    #[command(subcommand)]
    Pay(commands::PayCommands),

    /// Payment statistics dashboard
    #[command(subcommand)]
    Dashboard(commands::DashboardCommands),

    /// Look up a localized string
    Translate {
        /// Language code (e.g. en, ru, es, de)
        language: String,
        /// String key
        key: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "courtfund={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Endpoints and keys come from the environment, never from call sites
    let mut config = ClientConfig::from_env();
    if let Some(language) = cli.language {
        config.default_language = language;
    }
    config.validate()?;

    let result = match cli.command {
        Commands::Lottery(cmd) => commands::handle_lottery_command(cmd, &config).await,
        Commands::Pay(cmd) => commands::handle_pay_command(cmd, &config).await,
        Commands::Dashboard(cmd) => commands::handle_dashboard_command(cmd, &config).await,
        Commands::Translate { language, key } => {
            commands::handle_translate(&language, &key, &Catalog::builtin())
        }
    };

    if let Err(e) = result {
        match e {
            CourtfundError::NoParticipants => {
                eprintln!("Error: No participants to draw from");
                eprintln!("Wait for investments to come in, then try again");
            }
            CourtfundError::Api { status, message } => {
                eprintln!("Error: Server rejected the request ({status}): {message}");
            }
            CourtfundError::Config(msg) => {
                eprintln!("Error: Invalid configuration: {msg}");
                eprintln!("Check the COURTFUND_* environment variables");
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
