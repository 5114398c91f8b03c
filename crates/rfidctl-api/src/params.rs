// Parameter codec: domain concept + logical value -> query key/value pair.
//
// The reader's configuration surface is a flat namespace of string keys.
// Heterogeneous value types map onto it by a handful of fixed rules:
// booleans are always the lowercase literals "true"/"false" (never 0/1,
// never capitalized), channel-indexed keys carry the 1-based channel as a
// trailing digit, and the RSSI threshold travels as a negated magnitude.
//
// Everything here is pure and deterministic; no I/O, no shared state. Each
// encoder yields exactly one key/value pair.

use std::fmt::Display;

/// One query parameter.
pub type Param = (String, String);

/// Boolean flag under a fixed key.
pub(crate) fn flag(key: &str, value: bool) -> Param {
    (key.to_owned(), bool_token(value).to_owned())
}

/// Boolean flag whose key carries a 1-based channel suffix: `<prefix><ch>`.
pub(crate) fn channel_flag(prefix: &str, ch: u8, value: bool) -> Param {
    (format!("{prefix}{ch}"), bool_token(value).to_owned())
}

/// Numeric or string passthrough under a fixed key.
pub(crate) fn scalar(key: &str, value: impl Display) -> Param {
    (key.to_owned(), value.to_string())
}

/// Numeric passthrough whose key carries a 1-based channel suffix.
pub(crate) fn channel_scalar(prefix: &str, ch: u8, value: impl Display) -> Param {
    (format!("{prefix}{ch}"), value.to_string())
}

/// Signed-magnitude numeric: a non-negative magnitude `v` is transmitted as
/// the stringified `-v` (the device stores thresholds as negative dBm).
/// Arithmetic negation, so a zero magnitude stays `0`.
pub(crate) fn negated(key: &str, value: u32) -> Param {
    (key.to_owned(), (-i64::from(value)).to_string())
}

/// Boolean flag whose key carries a caller-supplied filter identifier.
pub(crate) fn filter_flag(prefix: &str, filter: u8, value: bool) -> Param {
    (format!("{prefix}{filter}"), bool_token(value).to_owned())
}

/// Value whose key carries a caller-supplied filter identifier.
pub(crate) fn filter_scalar(prefix: &str, filter: u8, value: impl Display) -> Param {
    (format!("{prefix}{filter}"), value.to_string())
}

fn bool_token(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
