// Post-write verification for the peripheral relay board.
//
// A 2xx from the reader only confirms the request was syntactically
// accepted; whether the relay hardware actually changed state is reported
// in the `smartboard` object echoed in the same response. The two relay
// setters cross-check that echo against the value they just requested
// instead of trusting the status code.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

/// Relay board state as echoed by the `peripheryconfig` endpoint.
///
/// `port_enable` is indexed by channel minus one (channels are 1-based on
/// the wire and in this API); `port_depends` holds the antenna-channel
/// dependency groupings currently active.
#[derive(Debug, Clone, Deserialize)]
pub struct SmartboardState {
    pub port_enable: Vec<bool>,
    pub port_depends: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct SmartboardEnvelope {
    smartboard: SmartboardState,
}

/// Outcome of a verified relay write.
///
/// `Mismatch` is a recoverable result, not an error: the device accepted
/// the request but did not apply the expected effect (unsupported channel,
/// conflicting dependency state, ...). Callers must branch on it.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The echoed state matches what was requested.
    Confirmed,
    /// The echoed state disagrees with the request for `channel`.
    Mismatch {
        expected: Value,
        actual: Value,
        channel: u8,
    },
}

impl Verdict {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl SmartboardState {
    /// Extract the `smartboard` object from a raw periphery response.
    ///
    /// A response without a well-formed `smartboard` object cannot be
    /// verified and is a decode failure.
    pub fn from_response(response: &Value) -> Result<Self, Error> {
        let envelope: SmartboardEnvelope =
            serde_json::from_value(response.clone()).map_err(|e| Error::Decode {
                message: format!("periphery response has no usable smartboard state: {e}"),
                body: response.to_string(),
            })?;
        Ok(envelope.smartboard)
    }
}

/// Check a per-channel relay-enable write against the echoed state.
///
/// Confirmed iff `port_enable[channel - 1]` equals the requested value. A
/// channel the board did not echo at all (no such entry) is a mismatch
/// against `null` -- the board only carries channels 1 and 2.
pub fn verify_relay_enable(state: &SmartboardState, requested: bool, channel: u8) -> Verdict {
    let actual = state.port_enable.get(usize::from(channel.saturating_sub(1)));
    match actual {
        Some(&applied) if applied == requested => Verdict::Confirmed,
        Some(&applied) => Verdict::Mismatch {
            expected: Value::Bool(requested),
            actual: Value::Bool(applied),
            channel,
        },
        None => Verdict::Mismatch {
            expected: Value::Bool(requested),
            actual: Value::Null,
            channel,
        },
    }
}

/// Check a per-channel antenna-dependency write against the echoed state.
///
/// Confirmed iff both the requested antenna value and the channel itself
/// appear in `port_depends`; otherwise the verdict names whichever lookup
/// failed, with the echoed `port_depends` as the actual.
pub fn verify_relay_antennas(state: &SmartboardState, requested: u8, channel: u8) -> Verdict {
    let depends = || {
        Value::Array(
            state
                .port_depends
                .iter()
                .map(|&d| Value::from(d))
                .collect(),
        )
    };

    if !state.port_depends.contains(&requested) {
        return Verdict::Mismatch {
            expected: Value::from(requested),
            actual: depends(),
            channel,
        };
    }
    if !state.port_depends.contains(&channel) {
        return Verdict::Mismatch {
            expected: Value::from(channel),
            actual: depends(),
            channel,
        };
    }
    Verdict::Confirmed
}
