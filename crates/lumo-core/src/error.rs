// ── Core error types ──
//
// User-facing errors from lumo-core. Consumers never see reqwest or
// serde_json errors directly -- the `From<lumo_api::Error>` impl
// translates transport-layer failures into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Argument errors ──────────────────────────────────────────────
    /// A numeric argument failed to parse. Raised before any network
    /// call is made.
    #[error("Cannot parse {value:?} as a number for {field}")]
    InvalidNumber { field: &'static str, value: String },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the lights service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Access token was rejected by the service")]
    InvalidToken,

    // ── Service errors ───────────────────────────────────────────────
    /// The exchange completed but the service refused it. The raw body
    /// is carried for diagnosis.
    #[error("Service error (HTTP {status}): {body}")]
    Service { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("Unexpected response shape: {message}")]
    Decode { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<lumo_api::Error> for CoreError {
    fn from(err: lumo_api::Error) -> Self {
        match err {
            lumo_api::Error::InvalidToken => CoreError::InvalidToken,
            lumo_api::Error::MalformedToken => CoreError::Config {
                message: "access token is not a valid header value".into(),
            },
            lumo_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Internal(e.to_string())
                }
            }
            lumo_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid URL: {e}"),
            },
            lumo_api::Error::Api { status, body } => CoreError::Service { status, body },
            lumo_api::Error::Deserialization { message, body: _ } => {
                CoreError::Decode { message }
            }
        }
    }
}
