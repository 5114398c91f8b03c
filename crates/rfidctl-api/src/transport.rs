// HTTP transport for the reader's configuration surface.
//
// The device collapses reads and writes onto GET-with-query-parameters
// (it has no distinct write verb), so this module deliberately exposes a
// single `request` primitive instead of a REST verb taxonomy. Every
// request carries HTTP basic auth; every response body is JSON.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;

/// How long the pre-flight TCP probe waits before declaring the device
/// unreachable.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Device credentials for HTTP basic auth.
///
/// The password is held as a [`SecretString`] so it never appears in
/// `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub login: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Transport-level knobs shared by every request.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Bound on the whole request lifecycle. On expiry the call fails as
    /// [`Error::Unreachable`] rather than hanging.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

/// Authenticated GET transport against one reader.
///
/// Owns the HTTP client, the device base URL, and the credentials. Holds no
/// other state: every call builds its parameters fresh, issues exactly one
/// request, and decodes the JSON body. No caching, no retries.
pub struct Transport {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl Transport {
    /// Create a transport with the default [`TransportConfig`].
    pub fn new(base_url: Url, credentials: Credentials) -> Result<Self, Error> {
        Self::with_config(base_url, credentials, &TransportConfig::default())
    }

    /// Create a transport with an explicit config.
    pub fn with_config(
        base_url: Url,
        credentials: Credentials,
        config: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("rfidctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::ClientBuild)?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// The device base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Pre-flight reachability probe: opens (and drops) a TCP connection to
    /// the base URL's host and port before any HTTP traffic is attempted.
    ///
    /// Fails with [`Error::Unreachable`] if the socket does not accept
    /// within 2 seconds.
    pub async fn probe(&self) -> Result<(), Error> {
        let host = self
            .base_url
            .host_str()
            .ok_or(Error::InvalidUrl(url::ParseError::EmptyHost))?;
        let port = self.base_url.port_or_known_default().unwrap_or(80);
        let addr = format!("{host}:{port}");
        trace!(%addr, "probing device socket");

        match tokio::time::timeout(PROBE_TIMEOUT, tokio::net::TcpStream::connect(&addr)).await {
            Ok(Ok(_stream)) => Ok(()),
            Ok(Err(io_err)) => Err(Error::Unreachable(Box::new(io_err))),
            Err(elapsed) => Err(Error::Unreachable(Box::new(elapsed))),
        }
    }

    /// Issue an authenticated GET against `{base_url}/{endpoint}` and decode
    /// the JSON body.
    ///
    /// `params` are URL-encoded as query parameters; an empty slice issues a
    /// plain read. Non-2xx statuses fail with [`Error::HttpStatus`] without
    /// inspecting the body; a body that is not valid JSON fails with
    /// [`Error::Decode`]. Never retries.
    pub async fn request(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, Error> {
        let url = self.endpoint_url(endpoint)?;
        debug!(%url, params = params.len(), "GET");

        let mut builder = self.http.get(url).basic_auth(
            &self.credentials.login,
            Some(self.credentials.password.expose_secret()),
        );
        if !params.is_empty() {
            builder = builder.query(params);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| Error::Unreachable(Box::new(e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Error::Unreachable(Box::new(e)))?;

        serde_json::from_str(&body).map_err(|e| {
            // char-based so a multi-byte character at the cutoff can't panic
            let preview: String = body.chars().take(200).collect();
            Error::Decode {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    /// Parameterless GET -- a plain read of a domain or a control command.
    pub async fn get(&self, endpoint: &str) -> Result<Value, Error> {
        self.request(endpoint, &[]).await
    }

    /// Build `{base_url}/{endpoint}`, tolerating a trailing slash on the
    /// configured base URL.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{endpoint}"))?)
    }
}
