// Peripheral configuration domain: relay board and wiegand output.
//
// The only domain that does more than encode-and-GET: the two relay
// setters cross-check the smartboard state echoed in the write response
// (see `crate::verify` for why the status code alone is not trusted).

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::params;
use crate::transport::Transport;
use crate::verify::{self, SmartboardState, Verdict};

const ENDPOINT: &str = "peripheryconfig";

/// Client for the peripheral (relay / wiegand) configuration domain.
pub struct PeripheryConfig {
    transport: Arc<Transport>,
}

impl PeripheryConfig {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Read the full peripheral configuration.
    ///
    /// `GET /peripheryconfig`
    pub async fn get_params(&self) -> Result<Value, Error> {
        self.transport.get(ENDPOINT).await
    }

    /// Enable or disable the relay board as a whole.
    ///
    /// `GET /peripheryconfig?smartboard_enable={true|false}`
    pub async fn set_relay_unit_enable(&self, value: bool) -> Result<Value, Error> {
        debug!(value, "toggling relay board");
        self.set(params::flag("smartboard_enable", value)).await
    }

    /// Enable or disable relay channel `ch`, verifying the echoed state.
    ///
    /// `GET /peripheryconfig?smartboard_port{ch}_enable={true|false}`
    ///
    /// The verdict is [`Verdict::Confirmed`] only if the board echoes the
    /// requested state back in `smartboard.port_enable`; mismatches are a
    /// recoverable outcome, not an error.
    pub async fn set_relay_enable(&self, value: bool, ch: u8) -> Result<Verdict, Error> {
        debug!(value, ch, "toggling relay channel");
        let key = format!("smartboard_port{ch}_enable");
        let response = self.set(params::flag(&key, value)).await?;
        let state = SmartboardState::from_response(&response)?;
        Ok(verify::verify_relay_enable(&state, value, ch))
    }

    /// Bind relay channel `ch` to antenna `value`, verifying the echoed
    /// dependency set.
    ///
    /// `GET /peripheryconfig?smartboard_port{ch}_ants={value}`
    pub async fn set_relay_antennas(&self, value: u8, ch: u8) -> Result<Verdict, Error> {
        debug!(value, ch, "binding relay channel to antenna");
        let key = format!("smartboard_port{ch}_ants");
        let response = self.set(params::scalar(&key, value)).await?;
        let state = SmartboardState::from_response(&response)?;
        Ok(verify::verify_relay_antennas(&state, value, ch))
    }

    /// Set the hold timer for relay channel `ch`.
    ///
    /// `GET /peripheryconfig?smartboard_port{ch}_timer={value}`
    pub async fn set_relay_timer(&self, value: u32, ch: u8) -> Result<Value, Error> {
        let key = format!("smartboard_port{ch}_timer");
        self.set(params::scalar(&key, value)).await
    }

    /// Enable or disable wiegand output channel `ch`.
    ///
    /// `GET /peripheryconfig?wiegand{ch}_enable={true|false}`
    pub async fn set_wiegand_enable(&self, value: bool, ch: u8) -> Result<Value, Error> {
        debug!(value, ch, "toggling wiegand output");
        let key = format!("wiegand{ch}_enable");
        self.set(params::flag(&key, value)).await
    }

    /// Set the wiegand frame type.
    ///
    /// `GET /peripheryconfig?wiegand1_type={value}`
    pub async fn set_wiegand_type(&self, value: u8) -> Result<Value, Error> {
        self.set(params::scalar("wiegand1_type", value)).await
    }

    /// Set how many bytes the wiegand payload is shifted.
    ///
    /// `GET /peripheryconfig?wiegand1_shift_bytes={value}`
    pub async fn set_wiegand_shift_bytes(&self, value: u8) -> Result<Value, Error> {
        self.set(params::scalar("wiegand1_shift_bytes", value)).await
    }

    /// Select the wiegand payload source.
    ///
    /// `GET /peripheryconfig?wiegand1_source={value}`
    pub async fn set_wiegand_source(&self, value: u8) -> Result<Value, Error> {
        self.set(params::scalar("wiegand1_source", value)).await
    }

    /// Beep once when the device boots.
    ///
    /// `GET /peripheryconfig?beep_on_start={true|false}`
    pub async fn set_beep_on_start(&self, value: bool) -> Result<Value, Error> {
        self.set(params::flag("beep_on_start", value)).await
    }

    /// Set the wiegand logical-0 pulse timeout.
    ///
    /// `GET /peripheryconfig?timeout_logical_0={value}`
    pub async fn set_timeout_logical(&self, value: u32) -> Result<Value, Error> {
        self.set(params::scalar("timeout_logical_0", value)).await
    }

    /// Set the wiegand inter-bit timeout.
    ///
    /// `GET /peripheryconfig?timeout_next_bit={value}`
    pub async fn set_timeout_next_bit(&self, value: u32) -> Result<Value, Error> {
        self.set(params::scalar("timeout_next_bit", value)).await
    }

    async fn set(&self, param: params::Param) -> Result<Value, Error> {
        self.transport.request(ENDPOINT, &[param]).await
    }
}
