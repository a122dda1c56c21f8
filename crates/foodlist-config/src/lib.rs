//! Shared configuration for the foodlist CLI.
//!
//! TOML profiles layered over built-in defaults and `FOODLIST_` environment
//! variables, and translation into `foodlist_core::CatalogConfig`. The CLI
//! adds `GlobalOpts`-aware overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use foodlist_core::{CatalogConfig, DEFAULT_API_URL, DEFAULT_PAGE_SIZE};

/// Environment prefix for config overrides (`FOODLIST_DEFAULTS__TIMEOUT=5`).
pub const ENV_PREFIX: &str = "FOODLIST_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' is not defined")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when `--profile` is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named catalog endpoints.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
            page_size: default_page_size(),
            api_url: default_api_url(),
            collection: default_collection(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}
fn default_collection() -> String {
    "Food".into()
}

/// A named catalog endpoint. Unset fields fall back to [`Defaults`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Base URL of the REST service (e.g. "https://xyz.mockapi.io").
    pub api_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "foodlist", "foodlist").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("foodlist");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file. A missing file is not an error.
///
/// Layering, lowest first: built-in defaults, the TOML file, then
/// `FOODLIST_`-prefixed env vars with `__` as the nesting separator.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile resolution ──────────────────────────────────────────────

impl Config {
    /// Pick the profile to use.
    ///
    /// An explicitly requested name must exist. Otherwise the
    /// `default_profile` is used when defined, and `None` means "plain
    /// defaults".
    pub fn resolve_profile(
        &self,
        requested: Option<&str>,
    ) -> Result<Option<(&str, &Profile)>, ConfigError> {
        if let Some(name) = requested {
            return self
                .profiles
                .get_key_value(name)
                .map(|(k, p)| Some((k.as_str(), p)))
                .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() });
        }
        Ok(self
            .default_profile
            .as_deref()
            .and_then(|name| self.profiles.get_key_value(name))
            .map(|(k, p)| (k.as_str(), p)))
    }

    /// Translate defaults plus an optional profile into a `CatalogConfig`.
    pub fn catalog_config(&self, profile: Option<&Profile>) -> Result<CatalogConfig, ConfigError> {
        let d = &self.defaults;
        let api_url = profile.map_or(d.api_url.as_str(), |p| p.api_url.as_str());
        let url: url::Url = api_url.parse().map_err(|_| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {api_url}"),
        })?;

        let collection = profile
            .and_then(|p| p.collection.clone())
            .unwrap_or_else(|| d.collection.clone());
        if collection.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "collection".into(),
                reason: "must not be empty".into(),
            });
        }

        let page_size = profile.and_then(|p| p.page_size).unwrap_or(d.page_size);
        if page_size == 0 {
            return Err(ConfigError::Validation {
                field: "page_size".into(),
                reason: "must be at least 1".into(),
            });
        }

        let timeout = profile.and_then(|p| p.timeout).unwrap_or(d.timeout);

        Ok(CatalogConfig {
            url,
            collection,
            timeout: Duration::from_secs(timeout),
            page_size,
        })
    }
}
