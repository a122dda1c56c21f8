use thiserror::Error;

/// Top-level error type for the `foodlist-api` crate.
///
/// Covers every failure mode of the catalog transport: connection and
/// timeout failures, non-success HTTP statuses, and undecodable bodies.
/// `foodlist-core` turns these into user-facing messages.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-success HTTP status from the collection.
    ///
    /// `message` carries the body's `message` field when the server
    /// returned a JSON error document.
    #[error("API error (HTTP {status}): {}", api_detail(.message, .reason))]
    Api {
        status: u16,
        reason: Option<String>,
        message: Option<String>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

fn api_detail<'a>(message: &'a Option<String>, reason: &'a Option<String>) -> &'a str {
    message
        .as_deref()
        .or(reason.as_deref())
        .unwrap_or("no details")
}

impl Error {
    /// Returns `true` for failures where the server was never reached
    /// (connection refused, DNS, timeouts).
    pub fn is_network(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Returns `true` when the request ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// The HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Human-readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_prefers_server_message() {
        let err = Error::Api {
            status: 400,
            reason: Some("Bad Request".into()),
            message: Some("name is required".into()),
        };
        assert_eq!(err.to_string(), "API error (HTTP 400): name is required");
        assert_eq!(err.server_message(), Some("name is required"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn api_error_falls_back_to_reason() {
        let err = Error::Api {
            status: 500,
            reason: Some("Internal Server Error".into()),
            message: None,
        };
        assert_eq!(err.to_string(), "API error (HTTP 500): Internal Server Error");
        assert!(!err.is_network());
    }

    #[test]
    fn api_errors_are_not_network_failures() {
        let missing = Error::Api {
            status: 404,
            reason: Some("Not Found".into()),
            message: None,
        };
        assert_eq!(missing.status(), Some(404));
        assert!(!missing.is_network());
        assert!(!missing.is_timeout());

        let decode = Error::Deserialization {
            message: "expected array".into(),
            body: "{}".into(),
        };
        assert_eq!(decode.status(), None);
        assert!(!decode.is_network());
    }
}
