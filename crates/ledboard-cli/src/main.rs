use anyhow::Result;
use clap::{Parser, Subcommand};
use ledboard_core::Config;
use std::path::PathBuf;

mod commands;
mod dispatch;

#[derive(Parser)]
#[command(name = "ledboard")]
#[command(about = "Manage the LED board renderer over SSH", long_about = None)]
struct Cli {
    /// Board name from the config file; optional when only one board is
    /// configured
    #[arg(short, long, global = true)]
    board: Option<String>,

    /// Path to the boards config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check credentials and reachability
    Test,

    /// Upload the renderer script to the board
    Install {
        /// Local path of the renderer script
        script: PathBuf,
    },

    /// Stop a running renderer
    Stop,

    /// Push a payload and relaunch the renderer
    Push {
        /// Inline JSON payload
        payload: Option<String>,

        /// Read the JSON payload from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_default()?,
    };
    let board = cli.board.as_deref();

    match cli.command {
        Commands::Test => commands::test::run(&config, board).await?,
        Commands::Install { script } => commands::install::run(&config, board, &script).await?,
        Commands::Stop => commands::stop::run(&config, board).await?,
        Commands::Push { payload, file } => {
            commands::push::run(&config, board, payload, file).await?
        }
    }

    Ok(())
}
