//! CLI error types and exit-code mapping.

use serde_json::Value;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const MISMATCH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error)]
pub enum CliError {
    /// Any failure surfaced by the API crate.
    #[error(transparent)]
    Api(#[from] rfidctl_api::Error),

    /// No reader URL configured (no --device, no env, no profile).
    #[error(
        "no reader configured -- pass --device, set RFIDCTL_DEVICE, or add a profile to {path}"
    )]
    NoDevice { path: String },

    /// The named profile does not exist in the config file.
    #[error("profile '{name}' not found in {path}")]
    UnknownProfile { name: String, path: String },

    /// The config file exists but could not be read or parsed.
    #[error("failed to load configuration: {0}")]
    Config(String),

    /// A verified relay write was accepted but not applied.
    ///
    /// Mapped to its own exit code: the device is healthy, the state is not
    /// what was asked for.
    #[error("relay state mismatch on channel {channel}: requested {expected}, device reports {actual}")]
    Mismatch {
        expected: Value,
        actual: Value,
        channel: u8,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Api(err) if err.is_unreachable() => exit_code::CONNECTION,
            Self::Mismatch { .. } => exit_code::MISMATCH,
            _ => exit_code::GENERAL,
        }
    }
}
