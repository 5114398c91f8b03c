mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rfidctl_api::Transport;

use crate::cli::Cli;
use crate::commands::Ctx;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        report(&err);
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let resolved = config::resolve(&cli.global)?;

    let transport = Arc::new(Transport::with_config(
        resolved.base_url,
        resolved.credentials,
        &resolved.transport,
    )?);

    // Fail fast on an unreachable reader before the first real request.
    if !cli.global.no_probe {
        transport.probe().await?;
    }

    let ctx = Ctx {
        transport,
        output: cli.global.output.clone(),
    };

    tracing::debug!(command = ?cli.command, "dispatching command");
    commands::dispatch(cli.command, &ctx).await
}

/// Print the error and its source chain to stderr.
fn report(err: &CliError) {
    eprintln!("error: {err}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
