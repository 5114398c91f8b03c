// Network configuration domain: station/AP mode and Wi-Fi association.
//
// Reads go to `netinfo`; joining a network and scanning are separate
// action endpoints (`wificonnect`, `scan`) on the same transport contract.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::params;
use crate::transport::Transport;

const ENDPOINT: &str = "netinfo";

/// Client for the network configuration domain.
pub struct NetworkConfig {
    transport: Arc<Transport>,
}

impl NetworkConfig {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Read the current network configuration and state.
    ///
    /// `GET /netinfo`
    pub async fn get_params(&self) -> Result<Value, Error> {
        self.transport.get(ENDPOINT).await
    }

    /// Enable or disable station (client) mode.
    ///
    /// `GET /netinfo?sta_enable={true|false}`
    pub async fn set_sta_enable(&self, value: bool) -> Result<Value, Error> {
        debug!(value, "toggling station mode");
        self.transport
            .request(ENDPOINT, &[params::flag("sta_enable", value)])
            .await
    }

    /// Enable or disable access-point mode.
    ///
    /// `GET /netinfo?ap_enable={true|false}`
    pub async fn set_ap_enable(&self, value: bool) -> Result<Value, Error> {
        debug!(value, "toggling access point mode");
        self.transport
            .request(ENDPOINT, &[params::flag("ap_enable", value)])
            .await
    }

    /// Initiate a Wi-Fi association.
    ///
    /// `GET /wificonnect?ssid={ssid}&pass={...}&safe={true|false}`
    ///
    /// `safe` keeps the current association as a fallback if the new one
    /// fails. The passphrase is not logged.
    pub async fn connect_wifi(
        &self,
        ssid: &str,
        password: &str,
        safe: bool,
    ) -> Result<Value, Error> {
        debug!(ssid, safe, "initiating wifi association");
        let query = [
            params::scalar("ssid", ssid),
            params::scalar("pass", password),
            params::flag("safe", safe),
        ];
        self.transport.request("wificonnect", &query).await
    }

    /// Scan for visible Wi-Fi networks.
    ///
    /// `GET /scan`
    pub async fn scan_wifi(&self) -> Result<Value, Error> {
        debug!("scanning for wifi networks");
        self.transport.get("scan").await
    }
}
