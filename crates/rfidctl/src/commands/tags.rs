//! Handlers for the `tags` subcommand.

use rfidctl_api::TagIdentity;

use crate::cli::TagsCommand;
use crate::commands::{Ctx, print_response};
use crate::error::CliError;

#[allow(clippy::too_many_lines)]
pub async fn handle(cmd: TagsCommand, ctx: &Ctx) -> Result<(), CliError> {
    let tags = TagIdentity::new(ctx.transport.clone());

    let response = match cmd {
        TagsCommand::Get => tags.get_params().await?,
        TagsCommand::List => tags.get_tag_list().await?,
        TagsCommand::ValidTimeMs { value } => tags.set_valid_time_ms(value).await?,
        TagsCommand::HoldTimeMs { value } => tags.set_hold_time_ms(value).await?,
        TagsCommand::RssiFilter { value } => tags.set_rssi_filter_value(value).await?,
        TagsCommand::RssiFilterEnable { value } => tags.set_rssi_filter_enable(value).await?,
        TagsCommand::EpcAccessPassword { value } => tags.set_epc_access_password(&value).await?,
        TagsCommand::EpcFilterValue { value, filter } => {
            tags.set_epc_filter_value(&value, filter).await?
        }
        TagsCommand::EpcFilterEnable { value, filter } => {
            tags.set_epc_filter_enable(value, filter).await?
        }
        TagsCommand::BeepOnTag { value } => tags.set_beep_on_tag(value).await?,
        TagsCommand::NotifyUart { value } => tags.set_notify_uart(value).await?,
        TagsCommand::NotifyUartJson { value } => tags.set_notify_uart_json(value).await?,
        TagsCommand::AddPrefix { value } => tags.set_add_prefix(&value).await?,
        TagsCommand::AddEpcl { value } => tags.set_add_epcl(value).await?,
        TagsCommand::AddEpc { value } => tags.set_add_epc(value).await?,
        TagsCommand::AddTidl { value } => tags.set_add_tidl(value).await?,
        TagsCommand::AddTid { value } => tags.set_add_tid(value).await?,
        TagsCommand::AddCrlf { value } => tags.set_add_crlf(value).await?,
        TagsCommand::AddAnt { value } => tags.set_add_ant(value).await?,
        TagsCommand::AddRssi { value } => tags.set_add_rssi(value).await?,
        TagsCommand::NotifyUartAlive { value } => tags.set_notify_uart_alive(value).await?,
        TagsCommand::NotifyUartSpeed { value } => tags.set_notify_uart_speed(value).await?,
        TagsCommand::NotifyIp { value } => tags.set_notify_ip(&value).await?,
        TagsCommand::NotifyPort { value } => tags.set_notify_port(value).await?,
        TagsCommand::NotifyTimeLimMs { value } => tags.set_notify_time_lim_ms(value).await?,
        TagsCommand::NotifyEnable { value } => tags.set_notify_enable(value).await?,
    };

    print_response(ctx, &response);
    Ok(())
}
