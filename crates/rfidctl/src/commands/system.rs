//! Handlers for the `system` subcommand.

use rfidctl_api::SystemCommands;

use crate::cli::SystemCommand;
use crate::commands::{Ctx, print_response};
use crate::error::CliError;

pub async fn handle(cmd: SystemCommand, ctx: &Ctx) -> Result<(), CliError> {
    let system = SystemCommands::new(ctx.transport.clone());

    let response = match cmd {
        SystemCommand::Logout => system.logout().await?,
        SystemCommand::Log => system.get_message_log().await?,
        SystemCommand::Version => system.get_version().await?,
        SystemCommand::Reboot => system.reboot().await?,
        SystemCommand::Beep => system.beep().await?,
        SystemCommand::InventoryOnce => system.inventory_once().await?,
        SystemCommand::Save => system.save_settings().await?,
        SystemCommand::Relay => system.trigger_relay().await?,
    };

    print_response(ctx, &response);
    Ok(())
}
