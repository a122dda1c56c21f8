// ── Core error types ──
//
// User-facing errors from foodlist-core. Consumers never see reqwest
// errors or JSON parse failures directly: transport failures are turned
// into one descriptive message per operation at the controller boundary.

use thiserror::Error;

use crate::command::{MutationKind, ValidationErrors};

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Transport errors ─────────────────────────────────────────────
    #[error("Network error: Please check your internet connection")]
    Network {
        #[source]
        source: foodlist_api::Error,
    },

    #[error("Failed to fetch foods: {detail}")]
    FetchFailed {
        detail: String,
        status: Option<u16>,
    },

    #[error("{message}")]
    MutationFailed {
        kind: MutationKind,
        message: String,
        status: Option<u16>,
    },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Food not found: {id}")]
    NotFound { id: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Translate a failed collection fetch.
    pub fn from_fetch(err: foodlist_api::Error) -> Self {
        if err.is_network() {
            return Self::Network { source: err };
        }
        match err {
            foodlist_api::Error::Api {
                status,
                reason,
                message,
            } => {
                let text = reason.or(message).unwrap_or_default();
                Self::FetchFailed {
                    detail: format!("{status} {text}").trim_end().to_owned(),
                    status: Some(status),
                }
            }
            other => Self::FetchFailed {
                status: other.status(),
                detail: other.to_string(),
            },
        }
    }

    /// Translate a failed create, update, or delete.
    ///
    /// Prefers the server's own message; otherwise a fixed per-kind text.
    pub fn from_mutation(kind: MutationKind, err: &foodlist_api::Error) -> Self {
        let message = err.server_message().map_or_else(
            || {
                match kind {
                    MutationKind::Create => "Failed to create food",
                    MutationKind::Update => "Failed to update food",
                    MutationKind::Delete => "Failed to delete food",
                }
                .to_owned()
            },
            String::from,
        );
        Self::MutationFailed {
            kind,
            message,
            status: err.status(),
        }
    }

    /// HTTP status behind this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::FetchFailed { status, .. } | Self::MutationFailed { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
