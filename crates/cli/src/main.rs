//! Tudo Fresco - command-line marketplace client
//!
//! Main entry point for the `tudofresco` binary.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tudofresco_cli::commands::dispatch;
use tudofresco_cli::utils::logging::init_tracing;
use tudofresco_cli::utils::output::Output;
use tudofresco_cli::{AppContext, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing, so `.env` can provide flag values through `env = ...`
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Could not load .env file"),
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = AppContext::from_cli(&cli)?;
    let mut out = Output::new(io::stdout().lock(), cli.output);
    dispatch(&ctx, cli.command, &mut out).await
}
