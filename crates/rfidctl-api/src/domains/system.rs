// Device lifecycle and diagnostic commands.
//
// Zero-parameter GETs against single-purpose endpoints. No verification;
// any transport failure propagates unchanged.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::transport::Transport;

/// Client for device control commands.
pub struct SystemCommands {
    transport: Arc<Transport>,
}

impl SystemCommands {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// End the current basic-auth session.
    ///
    /// `GET /logout`
    pub async fn logout(&self) -> Result<Value, Error> {
        self.transport.get("logout").await
    }

    /// Fetch the device message log.
    ///
    /// `GET /messagelog`
    pub async fn get_message_log(&self) -> Result<Value, Error> {
        self.transport.get("messagelog").await
    }

    /// Fetch firmware version information.
    ///
    /// `GET /version`
    pub async fn get_version(&self) -> Result<Value, Error> {
        self.transport.get("version").await
    }

    /// Reboot the device.
    ///
    /// `GET /reboot`
    pub async fn reboot(&self) -> Result<Value, Error> {
        debug!("rebooting device");
        self.transport.get("reboot").await
    }

    /// Sound the onboard beeper once.
    ///
    /// `GET /beepdevice`
    pub async fn beep(&self) -> Result<Value, Error> {
        self.transport.get("beepdevice").await
    }

    /// Run a single inventory pass.
    ///
    /// `GET /inventory_once`
    pub async fn inventory_once(&self) -> Result<Value, Error> {
        debug!("running single inventory pass");
        self.transport.get("inventory_once").await
    }

    /// Persist the current configuration to flash.
    ///
    /// `GET /makedump`
    pub async fn save_settings(&self) -> Result<Value, Error> {
        debug!("saving settings snapshot");
        self.transport.get("makedump").await
    }

    /// Pulse relay output 1.
    ///
    /// `GET /relay1`
    pub async fn trigger_relay(&self) -> Result<Value, Error> {
        self.transport.get("relay1").await
    }
}
