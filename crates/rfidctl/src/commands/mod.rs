//! Command handlers, one module per configuration domain.

pub mod net;
pub mod periphery;
pub mod rf;
pub mod system;
pub mod tags;

use std::sync::Arc;

use owo_colors::OwoColorize;
use serde_json::Value;

use rfidctl_api::{Transport, Verdict};

use crate::cli::{Command, OutputFormat};
use crate::error::CliError;

/// Shared handler context: the transport and the selected output format.
pub struct Ctx {
    pub transport: Arc<Transport>,
    pub output: OutputFormat,
}

/// Dispatch a parsed command to its domain handler.
pub async fn dispatch(command: Command, ctx: &Ctx) -> Result<(), CliError> {
    match command {
        Command::Rf(cmd) => rf::handle(cmd, ctx).await,
        Command::Periphery(cmd) => periphery::handle(cmd, ctx).await,
        Command::Tags(cmd) => tags::handle(cmd, ctx).await,
        Command::Net(cmd) => net::handle(cmd, ctx).await,
        Command::System(cmd) => system::handle(cmd, ctx).await,
    }
}

/// Print a device response in the context's output format.
pub(crate) fn print_response(ctx: &Ctx, value: &Value) {
    println!("{}", crate::output::render(&ctx.output, value));
}

/// Turn a relay write verdict into CLI output: confirmed prints a line,
/// a mismatch becomes a `CliError` with its own exit code.
pub(crate) fn check_verdict(verdict: Verdict, channel: u8) -> Result<(), CliError> {
    match verdict {
        Verdict::Confirmed => {
            println!("{} channel {channel}", "confirmed".green().bold());
            Ok(())
        }
        Verdict::Mismatch {
            expected,
            actual,
            channel,
        } => Err(CliError::Mismatch {
            expected,
            actual,
            channel,
        }),
    }
}
