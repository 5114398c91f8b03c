//! Handlers for the `rf` subcommand.

use rfidctl_api::RfidConfig;

use crate::cli::RfCommand;
use crate::commands::{Ctx, print_response};
use crate::error::CliError;

pub async fn handle(cmd: RfCommand, ctx: &Ctx) -> Result<(), CliError> {
    let rfid = RfidConfig::new(ctx.transport.clone());

    let response = match cmd {
        RfCommand::Get => rfid.get_params().await?,
        RfCommand::ContinuousScanning { value } => rfid.set_continuous_scanning(value).await?,
        RfCommand::Power { value, ch } => rfid.set_power_antenna(value, ch).await?,
        RfCommand::Antenna { value, ch } => rfid.set_enable_antenna(value, ch).await?,
        RfCommand::Trigger { value, ch } => rfid.set_enable_trigger(value, ch).await?,
        RfCommand::TriggerState { value, ch } => rfid.set_trigger_state(value, ch).await?,
        RfCommand::Session { value } => rfid.set_antenna_dependency(value).await?,
        RfCommand::RepeatTime { value } => rfid.set_repeat_time(value).await?,
        RfCommand::MinHoldMs { value } => rfid.set_min_hold_ms(value).await?,
    };

    print_response(ctx, &response);
    Ok(())
}
