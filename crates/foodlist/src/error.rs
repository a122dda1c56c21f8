//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

use foodlist_config::ConfigError;
use foodlist_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(foodlist::connection_failed),
        help(
            "Check that the catalog service is reachable.\n\
             Override the endpoint with --api-url or the profile's api_url."
        )
    )]
    ConnectionFailed {
        message: String,
        #[source]
        source: foodlist_api::Error,
    },

    #[error("{message}")]
    #[diagnostic(
        code(foodlist::timeout),
        help("Increase the timeout with --timeout or check the service's responsiveness.")
    )]
    Timeout {
        message: String,
        #[source]
        source: foodlist_api::Error,
    },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(foodlist::not_found),
        help("Run: foodlist {list_command} to see available items")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(foodlist::api_error))]
    ApiError { status: Option<u16>, message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(foodlist::validation))]
    Validation { field: String, reason: String },

    #[error("Invalid food details")]
    #[diagnostic(code(foodlist::invalid_form), help("{details}"))]
    InvalidForm { details: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(foodlist::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: foodlist config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(foodlist::config))]
    Config(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(foodlist::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } | Self::ApiError { status: Some(404), .. } => {
                exit_code::NOT_FOUND
            }
            Self::Validation { .. }
            | Self::InvalidForm { .. }
            | Self::ProfileNotFound { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::Network { source } if source.is_timeout() => {
                Self::Timeout { message, source }
            }
            CoreError::Network { source } => Self::ConnectionFailed { message, source },

            CoreError::FetchFailed { status, .. } | CoreError::MutationFailed { status, .. } => {
                Self::ApiError { status, message }
            }

            CoreError::NotFound { id } => Self::NotFound {
                resource_type: "food".into(),
                identifier: id,
                list_command: "list".into(),
            },

            CoreError::Validation(errors) => Self::InvalidForm {
                details: errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join("\n"),
            },

            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}
