//! CLI-owned configuration: TOML file + environment, and translation to
//! `lumo_core::ControllerConfig`.
//!
//! Core never sees these types -- it receives a pre-built `ControllerConfig`
//! with the credential already resolved (flag > environment > config file).

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use lumo_core::{ControllerConfig, DEFAULT_API_URL};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── TOML config struct ───────────────────────────────────────────────

/// CLI-owned TOML configuration. There is exactly one cloud endpoint,
/// so the file is flat -- no profile map.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// OAuth access token (plaintext -- prefer the env var).
    pub token: Option<String>,

    /// Override for the API base URL (useful against a staging host).
    pub api_url: Option<String>,
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "lumo-cli", "lumo")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        })
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("lumo");
    p
}

// ── Config loading ───────────────────────────────────────────────────

fn config_figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("LUMO_"))
}

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let config: Config = config_figment(&config_path()).extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Resolution ───────────────────────────────────────────────────────

/// Translate global flags + config file into a `ControllerConfig`.
///
/// This is the single boundary where CLI config types cross into core
/// types. A missing token is fatal here, before any command dispatch.
pub fn resolve(global: &GlobalOpts) -> Result<ControllerConfig, CliError> {
    let cfg = load_config_or_default();

    // Token: flag > env (clap reads LUMO_TOKEN) > config file.
    let token = global
        .token
        .clone()
        .or(cfg.token)
        .ok_or_else(|| CliError::MissingToken {
            path: config_path().display().to_string(),
        })?;

    // API URL: flag > env > config file > built-in default.
    let url_str = global
        .api_url
        .clone()
        .or(cfg.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
    let api_url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "api-url".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    Ok(ControllerConfig {
        api_url,
        token: SecretString::from(token),
        timeout: Duration::from_secs(global.timeout),
    })
}
