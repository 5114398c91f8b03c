//! Handlers for the `periphery` subcommand.
//!
//! The two relay setters go through verdict checking instead of printing
//! the raw response; everything else prints the device echo.

use rfidctl_api::PeripheryConfig;

use crate::cli::PeripheryCommand;
use crate::commands::{Ctx, check_verdict, print_response};
use crate::error::CliError;

pub async fn handle(cmd: PeripheryCommand, ctx: &Ctx) -> Result<(), CliError> {
    let periphery = PeripheryConfig::new(ctx.transport.clone());

    let response = match cmd {
        PeripheryCommand::Get => periphery.get_params().await?,
        PeripheryCommand::RelayUnit { value } => periphery.set_relay_unit_enable(value).await?,
        PeripheryCommand::RelayEnable { value, ch } => {
            let verdict = periphery.set_relay_enable(value, ch).await?;
            return check_verdict(verdict, ch);
        }
        PeripheryCommand::RelayAntennas { value, ch } => {
            let verdict = periphery.set_relay_antennas(value, ch).await?;
            return check_verdict(verdict, ch);
        }
        PeripheryCommand::RelayTimer { value, ch } => periphery.set_relay_timer(value, ch).await?,
        PeripheryCommand::WiegandEnable { value, ch } => {
            periphery.set_wiegand_enable(value, ch).await?
        }
        PeripheryCommand::WiegandType { value } => periphery.set_wiegand_type(value).await?,
        PeripheryCommand::WiegandShiftBytes { value } => {
            periphery.set_wiegand_shift_bytes(value).await?
        }
        PeripheryCommand::WiegandSource { value } => periphery.set_wiegand_source(value).await?,
        PeripheryCommand::BeepOnStart { value } => periphery.set_beep_on_start(value).await?,
        PeripheryCommand::TimeoutLogical { value } => periphery.set_timeout_logical(value).await?,
        PeripheryCommand::TimeoutNextBit { value } => {
            periphery.set_timeout_next_bit(value).await?
        }
    };

    print_response(ctx, &response);
    Ok(())
}
