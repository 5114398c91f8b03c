//! Handlers for the `net` subcommand.

use rfidctl_api::NetworkConfig;

use crate::cli::NetCommand;
use crate::commands::{Ctx, print_response};
use crate::error::CliError;

pub async fn handle(cmd: NetCommand, ctx: &Ctx) -> Result<(), CliError> {
    let net = NetworkConfig::new(ctx.transport.clone());

    let response = match cmd {
        NetCommand::Get => net.get_params().await?,
        NetCommand::Sta { value } => net.set_sta_enable(value).await?,
        NetCommand::Ap { value } => net.set_ap_enable(value).await?,
        NetCommand::Connect { ssid, pass, safe } => {
            let pass = match pass {
                Some(p) => p,
                None => rpassword::prompt_password(format!("Passphrase for '{ssid}': "))?,
            };
            net.connect_wifi(&ssid, &pass, safe).await?
        }
        NetCommand::Scan => net.scan_wifi().await?,
    };

    print_response(ctx, &response);
    Ok(())
}
