//! CLI configuration -- thin wrapper around `foodlist_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--api-url, --timeout, --output, --color).

use std::time::Duration;

use clap::ValueEnum;

use foodlist_core::CatalogConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use foodlist_config::{
    Config, ConfigError, Profile, config_path, load_config, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Fill unset presentation flags from the config's `[defaults]`.
///
/// Unknown values in the file are ignored in favour of the built-in
/// default.
pub fn apply_defaults(global: &mut GlobalOpts, config: &Config) {
    if global.output.is_none() {
        global.output = OutputFormat::from_str(&config.defaults.output, true).ok();
    }
    if global.color.is_none() {
        global.color = ColorMode::from_str(&config.defaults.color, true).ok();
    }
}

/// Translate config + global flags into a `CatalogConfig`.
///
/// Flag overrides take priority over profile values, which take priority
/// over `[defaults]`.
pub fn resolve_catalog_config(
    config: &Config,
    global: &GlobalOpts,
) -> Result<CatalogConfig, CliError> {
    let profile = config
        .resolve_profile(global.profile.as_deref())
        .map_err(|err| match err {
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: available_profiles(config),
            },
            other => other.into(),
        })?;

    if let Some((name, _)) = profile {
        tracing::debug!(profile = name, "using profile");
    }

    let mut catalog = config.catalog_config(profile.map(|(_, p)| p))?;

    if let Some(ref url_str) = global.api_url {
        catalog.url = url_str.parse().map_err(|_| CliError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {url_str}"),
        })?;
    }
    if let Some(secs) = global.timeout {
        catalog.timeout = Duration::from_secs(secs);
    }

    Ok(catalog)
}

/// Comma-separated, sorted profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().map(String::as_str).collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort_unstable();
    names.join(", ")
}
