use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use classify_cli::GatewayClient;
use classify_cli::commands;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "classify",
    version,
    about = "Find out which LeetCode problem a solution is attempting"
)]
struct Cli {
    /// Base URL of the classification gateway.
    #[arg(
        long,
        global = true,
        env = "CLASSIFIER_URL",
        default_value = "http://localhost:20501"
    )]
    url: String,

    /// Log requests and stale responses to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Re-classify a source file every time it is saved
    Watch {
        file: PathBuf,

        /// Quiet period after the last change before classifying.
        #[arg(long, env = "CLASSIFIER_DEBOUNCE_MS", default_value_t = 500)]
        debounce_ms: u64,
    },
    /// Classify a source file, or stdin, once
    Once { file: Option<PathBuf> },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let client = GatewayClient::new(&cli.url);

    match cli.command {
        Command::Watch { file, debounce_ms } => {
            commands::watch(client, file, Duration::from_millis(debounce_ms)).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Once { file } => {
            if commands::once(&client, file.as_deref()).await? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
