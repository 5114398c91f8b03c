// Tag identification domain: filtering, EPC access, and notification
// formatting. All writes go to the `tagidentity` endpoint; the tag list
// is the same endpoint with an extra query flag.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::params;
use crate::transport::Transport;

const ENDPOINT: &str = "tagidentity";

/// Client for the tag identification domain.
pub struct TagIdentity {
    transport: Arc<Transport>,
}

impl TagIdentity {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Read the full tag identification configuration.
    ///
    /// `GET /tagidentity`
    pub async fn get_params(&self) -> Result<Value, Error> {
        self.transport.get(ENDPOINT).await
    }

    /// Read the currently held tag list instead of the configuration.
    ///
    /// `GET /tagidentity?taglist=true`
    pub async fn get_tag_list(&self) -> Result<Value, Error> {
        debug!("fetching tag list");
        self.set(params::flag("taglist", true)).await
    }

    /// Set how long a tag read stays valid, in milliseconds.
    pub async fn set_valid_time_ms(&self, value: u32) -> Result<Value, Error> {
        self.set(params::scalar("validtime_ms", value)).await
    }

    /// Set how long a tag is held in the list after last sighting.
    pub async fn set_hold_time_ms(&self, value: u32) -> Result<Value, Error> {
        self.set(params::scalar("hold_time_ms", value)).await
    }

    /// Set the RSSI filter threshold from a non-negative magnitude.
    ///
    /// The device stores the threshold as negative dBm, so a magnitude of
    /// `10` travels as `rssi_filter_value=-10`.
    pub async fn set_rssi_filter_value(&self, value: u32) -> Result<Value, Error> {
        debug!(value, "setting rssi filter threshold");
        self.set(params::negated("rssi_filter_value", value)).await
    }

    /// Enable or disable the RSSI filter.
    pub async fn set_rssi_filter_enable(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("rssi_filter_enable", value)).await
    }

    /// Set the EPC access password used for protected tag operations.
    pub async fn set_epc_access_password(&self, value: &str) -> Result<Value, Error> {
        // Deliberately not logged.
        self.set(params::scalar("epc_access_password", value)).await
    }

    /// Set the match value of EPC filter `filter`.
    ///
    /// `GET /tagidentity?epc_filter_value{filter}={value}`
    pub async fn set_epc_filter_value(&self, value: &str, filter: u8) -> Result<Value, Error> {
        debug!(filter, "setting epc filter value");
        self.set(params::filter_scalar("epc_filter_value", filter, value))
            .await
    }

    /// Enable or disable EPC filter `filter`.
    ///
    /// `GET /tagidentity?epc_filter_enable{filter}={true|false}`
    pub async fn set_epc_filter_enable(&self, value: bool, filter: u8) -> Result<Value, Error> {
        debug!(value, filter, "toggling epc filter");
        self.set(params::filter_flag("epc_filter_enable", filter, value))
            .await
    }

    /// Beep on every tag sighting.
    pub async fn set_beep_on_tag(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("beep_on_tag", value)).await
    }

    // ── Notification formatting ──────────────────────────────────────

    /// Mirror tag notifications onto the UART.
    pub async fn set_notify_uart(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("notify_uart", value)).await
    }

    /// Emit UART notifications as JSON instead of raw lines.
    pub async fn set_notify_uart_json(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("notify_uart_json", value)).await
    }

    /// Prefix every notification line with a fixed string.
    pub async fn set_add_prefix(&self, value: &str) -> Result<Value, Error> {
        self.set(params::scalar("add_prefix", value)).await
    }

    /// Include the EPC length field.
    pub async fn set_add_epcl(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("add_epcl", value)).await
    }

    /// Include the EPC itself.
    pub async fn set_add_epc(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("add_epc", value)).await
    }

    /// Include the TID length field.
    pub async fn set_add_tidl(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("add_tidl", value)).await
    }

    /// Include the TID itself.
    pub async fn set_add_tid(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("add_tid", value)).await
    }

    /// Terminate notification lines with CRLF.
    pub async fn set_add_crlf(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("add_crlf", value)).await
    }

    /// Include the sighting antenna number.
    pub async fn set_add_ant(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("add_ant", value)).await
    }

    /// Include the sighting RSSI.
    pub async fn set_add_rssi(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("add_rssi", value)).await
    }

    /// Emit periodic keep-alive messages on the UART.
    pub async fn set_notify_uart_alive(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("notify_uart_alive", value)).await
    }

    /// Set the UART baud rate for notifications.
    pub async fn set_notify_uart_speed(&self, value: u32) -> Result<Value, Error> {
        self.set(params::scalar("notify_uart_speed", value)).await
    }

    // ── Network notification target ──────────────────────────────────

    /// Set the notification target IP address.
    pub async fn set_notify_ip(&self, value: &str) -> Result<Value, Error> {
        debug!(value, "setting notify target ip");
        self.set(params::scalar("notify_ip", value)).await
    }

    /// Set the notification target port.
    pub async fn set_notify_port(&self, value: u16) -> Result<Value, Error> {
        self.set(params::scalar("notify_port", value)).await
    }

    /// Set the notification delivery time limit in milliseconds.
    pub async fn set_notify_time_lim_ms(&self, value: u32) -> Result<Value, Error> {
        self.set(params::scalar("notify_time_lim_ms", value)).await
    }

    /// Enable or disable network notifications.
    pub async fn set_notify_enable(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("notify_enable", value)).await
    }

    async fn set(&self, param: params::Param) -> Result<Value, Error> {
        self.transport.request(ENDPOINT, &[param]).await
    }
}
