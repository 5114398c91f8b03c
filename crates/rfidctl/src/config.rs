//! CLI-owned configuration: TOML profiles merged with `RFIDCTL_*` env vars,
//! resolved against command-line flags into the pieces the API crate needs.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use url::Url;

use rfidctl_api::{Credentials, TransportConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

const DEFAULT_LOGIN: &str = "admin";

// ── TOML config structs ──────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Profile used when --profile is not given.
    pub default_profile: Option<String>,

    /// Named reader profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Reader base URL (e.g. "http://192.168.4.1").
    pub device: String,

    pub login: Option<String>,

    /// Stored in plain text; prefer RFIDCTL_PASSWORD or the prompt.
    pub password: Option<String>,

    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

/// Everything needed to build a `Transport`.
pub struct ResolvedConfig {
    pub base_url: Url,
    pub credentials: Credentials,
    pub transport: TransportConfig,
}

// ── Loading ──────────────────────────────────────────────────────────

/// Path of the config file (`<config dir>/rfidctl/config.toml`).
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "rfidctl")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("rfidctl.toml"))
}

/// Load the config file merged with `RFIDCTL_*` env vars. A missing file is
/// an empty config, not an error.
pub fn load_config() -> Result<Config, CliError> {
    Figment::new()
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("RFIDCTL_CONFIG_"))
        .extract()
        .map_err(|e| CliError::Config(e.to_string()))
}

// ── Resolution ───────────────────────────────────────────────────────

/// Resolve config file + env + CLI flags into transport parameters.
///
/// Precedence, highest first: CLI flags (and their env fallbacks), the
/// selected profile, built-in defaults. The password falls back to an
/// interactive prompt so it never has to live in shell history.
pub fn resolve(global: &GlobalOpts) -> Result<ResolvedConfig, CliError> {
    let cfg = load_config()?;

    let profile = match &global.profile {
        Some(name) => Some(cfg.profiles.get(name).ok_or_else(|| {
            CliError::UnknownProfile {
                name: name.clone(),
                path: config_path().display().to_string(),
            }
        })?),
        None => cfg
            .default_profile
            .as_ref()
            .and_then(|name| cfg.profiles.get(name)),
    };

    let device = global
        .device
        .clone()
        .or_else(|| profile.map(|p| p.device.clone()))
        .ok_or_else(|| CliError::NoDevice {
            path: config_path().display().to_string(),
        })?;
    let base_url: Url = device
        .parse()
        .map_err(|e: url::ParseError| CliError::Api(e.into()))?;

    let login = global
        .login
        .clone()
        .or_else(|| profile.and_then(|p| p.login.clone()))
        .unwrap_or_else(|| DEFAULT_LOGIN.to_owned());

    let password = match global
        .password
        .clone()
        .or_else(|| profile.and_then(|p| p.password.clone()))
    {
        Some(pw) => pw,
        None => rpassword::prompt_password(format!("Password for {login}@{base_url}: "))?,
    };

    let timeout = global
        .timeout
        .or_else(|| profile.and_then(|p| p.timeout))
        .map_or_else(
            || TransportConfig::default().timeout,
            Duration::from_secs,
        );

    Ok(ResolvedConfig {
        base_url,
        credentials: Credentials::new(login, password),
        transport: TransportConfig { timeout },
    })
}
