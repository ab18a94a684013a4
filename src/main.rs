use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;

use wakalead::commands;

#[derive(Parser, Debug)]
#[command(name = "wakalead")]
#[command(about = "WakaTime activity leaderboards with an engagement score")]
#[command(version)]
struct Cli {
    /// Directory holding the roster, user documents and leaderboards
    #[arg(short, long, default_value = "data", env = "WAKALEAD_DATA_DIR")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape every roster member and update their persisted stats
    Sync,
    /// Scrape a single user right away, creating their document if needed
    Add {
        /// WakaTime username as it appears on the stats card
        username: String,
    },
    /// Rebuild the global and per-language leaderboards
    Aggregate,
    /// Refresh the member roster from the upstream leaders endpoint
    Members,
    /// Re-arm the score decay grace period for every user
    ResetUpdated,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Sync => commands::sync(&cli.data_dir).await,
        Command::Add { username } => commands::add_user(&cli.data_dir, &username).await,
        Command::Aggregate => commands::aggregate(&cli.data_dir),
        Command::Members => commands::refresh_members(&cli.data_dir).await,
        Command::ResetUpdated => commands::reset_updated(&cli.data_dir),
    }
}
