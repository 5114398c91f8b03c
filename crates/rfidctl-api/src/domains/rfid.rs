// RF / antenna configuration domain.
//
// Inventory behavior, per-channel antenna power and enablement, trigger
// wiring, and scan timing. All writes go to the `rfidconfig` endpoint.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::params;
use crate::transport::Transport;

const ENDPOINT: &str = "rfidconfig";

/// Client for the RF configuration domain.
pub struct RfidConfig {
    transport: Arc<Transport>,
}

impl RfidConfig {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Read the full RF configuration.
    ///
    /// `GET /rfidconfig`
    pub async fn get_params(&self) -> Result<Value, Error> {
        self.transport.get(ENDPOINT).await
    }

    /// Toggle continuous (infinite) inventory scanning.
    ///
    /// `GET /rfidconfig?infiniteinventory={true|false}`
    pub async fn set_continuous_scanning(&self, value: bool) -> Result<Value, Error> {
        debug!(value, "setting continuous scanning");
        self.set(params::flag("infiniteinventory", value)).await
    }

    /// Set transmit power for antenna `ch` (1-based).
    ///
    /// `GET /rfidconfig?pwrant{ch}={value}`
    pub async fn set_power_antenna(&self, value: u8, ch: u8) -> Result<Value, Error> {
        debug!(value, ch, "setting antenna power");
        self.set(params::channel_scalar("pwrant", ch, value)).await
    }

    /// Enable or disable antenna `ch`.
    ///
    /// `GET /rfidconfig?enant{ch}={true|false}`
    pub async fn set_enable_antenna(&self, value: bool, ch: u8) -> Result<Value, Error> {
        debug!(value, ch, "toggling antenna");
        self.set(params::channel_flag("enant", ch, value)).await
    }

    /// Enable or disable the hardware trigger input for channel `ch`.
    ///
    /// `GET /rfidconfig?entrig{ch}={true|false}`
    pub async fn set_enable_trigger(&self, value: bool, ch: u8) -> Result<Value, Error> {
        debug!(value, ch, "toggling trigger input");
        self.set(params::channel_flag("entrig", ch, value)).await
    }

    /// Set the trigger state value for channel `ch`.
    ///
    /// `GET /rfidconfig?triggered{ch}={value}`
    pub async fn set_trigger_state(&self, value: u8, ch: u8) -> Result<Value, Error> {
        debug!(value, ch, "setting trigger state");
        self.set(params::channel_scalar("triggered", ch, value))
            .await
    }

    /// Set the RF session / antenna dependency mode.
    ///
    /// `GET /rfidconfig?rf_session={value}`
    pub async fn set_antenna_dependency(&self, value: u8) -> Result<Value, Error> {
        debug!(value, "setting rf session mode");
        self.set(params::scalar("rf_session", value)).await
    }

    /// Set the inventory repeat interval.
    ///
    /// `GET /rfidconfig?repeattime={value}`
    pub async fn set_repeat_time(&self, value: u32) -> Result<Value, Error> {
        self.set(params::scalar("repeattime", value)).await
    }

    /// Set the minimum hold time in milliseconds.
    ///
    /// `GET /rfidconfig?min_hold_ms={value}`
    pub async fn set_min_hold_ms(&self, value: u32) -> Result<Value, Error> {
        self.set(params::scalar("min_hold_ms", value)).await
    }

    async fn set(&self, param: params::Param) -> Result<Value, Error> {
        self.transport.request(ENDPOINT, &[param]).await
    }
}
