use thiserror::Error;

/// Top-level error type for the `rfidctl-api` crate.
///
/// The reader offers exactly one wire surface (basic-auth GET with query
/// parameters), so the taxonomy is small: the request never left, the device
/// said no, or the body was not the JSON it promised. Verification mismatches
/// are deliberately *not* errors -- they are a [`Verdict`](crate::Verdict)
/// the caller must branch on.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection-level failure: refused, DNS, timeout. The request was
    /// never answered by the device.
    #[error("device unreachable: {0}")]
    Unreachable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The device answered with a non-2xx status (e.g. 401 on bad
    /// credentials). The body is not inspected.
    #[error("device returned HTTP {0}")]
    HttpStatus(u16),

    /// The response body was not well-formed JSON, or lacked the structure
    /// a verified write requires.
    #[error("malformed device response: {message}")]
    Decode { message: String, body: String },

    /// The base URL could not be parsed or has no usable host.
    #[error("invalid device URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl Error {
    /// Returns `true` if this error indicates the device could not be
    /// reached at all (as opposed to reached-but-unhappy).
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }

    /// Returns `true` for an authentication rejection (HTTP 401).
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::HttpStatus(401))
    }
}
