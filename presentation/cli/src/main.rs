use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod commands;
mod config;
mod setup;

use cli::Cli;
use commands::CommandOutcome;

/// EatRight command-line entry point
///
/// Wires the business use cases to their adapters and prints every result as
/// JSON on stdout. Diagnostics go to stderr through `tracing`.
///
/// Layout:
/// - config/: Environment-driven configuration (database, OpenAI, Gemini)
/// - setup/: Dependency wiring
/// - commands/: Subcommand handlers and their output DTOs
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse arguments and run
    let cli = Cli::parse();
    let outcome = commands::run(cli.command).await?;

    // 4. Report
    match outcome {
        CommandOutcome::Success(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::SUCCESS)
        }
        CommandOutcome::Failure(error) => {
            println!("{}", serde_json::to_string_pretty(&error)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
