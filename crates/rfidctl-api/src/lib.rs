//! rfidctl-api: async client for the HTTP configuration surface of
//! network-attached RFID readers.
//!
//! The reader exposes a basic-auth protected, query-parameter driven GET
//! API. This crate wraps it as a [`Transport`] shared by four domain
//! clients ([`RfidConfig`], [`PeripheryConfig`], [`TagIdentity`],
//! [`NetworkConfig`]) plus [`SystemCommands`] for lifecycle actions.
//! Relay writes are verified against the state the board echoes back; see
//! [`Verdict`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use rfidctl_api::{Credentials, PeripheryConfig, Transport, Verdict};
//!
//! # async fn demo() -> Result<(), rfidctl_api::Error> {
//! let transport = Arc::new(Transport::new(
//!     "http://192.168.4.1".parse()?,
//!     Credentials::new("admin", "admin"),
//! )?);
//! transport.probe().await?;
//!
//! let periphery = PeripheryConfig::new(transport);
//! match periphery.set_relay_enable(true, 1).await? {
//!     Verdict::Confirmed => {}
//!     Verdict::Mismatch { expected, actual, channel } => {
//!         eprintln!("channel {channel}: wanted {expected}, board reports {actual}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod domains;
pub mod error;
mod params;
pub mod transport;
pub mod verify;

pub use domains::{NetworkConfig, PeripheryConfig, RfidConfig, SystemCommands, TagIdentity};
pub use error::Error;
pub use transport::{Credentials, Transport, TransportConfig};
pub use verify::{SmartboardState, Verdict};
