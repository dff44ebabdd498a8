use thiserror::Error;

/// Top-level error type for the `lumo-api` crate.
///
/// Covers every failure mode of an exchange with the cloud lights API:
/// credential rejection, transport, service-side failures, and response
/// decoding. `lumo-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Bearer token rejected by the service (HTTP 401).
    #[error("Invalid access token")]
    InvalidToken,

    /// The token contains bytes that cannot be sent in an HTTP header.
    #[error("Access token is not a valid header value")]
    MalformedToken,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, TLS, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Service ─────────────────────────────────────────────────────
    /// Non-2xx status from the service. The raw body is kept verbatim
    /// so callers can surface it for diagnosis.
    #[error("Service error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The HTTP status behind this error, if the exchange completed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidToken => Some(401),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the service throttled the caller.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// Returns `true` if this is a transient transport failure worth retrying
    /// by hand (the client itself never retries).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => self.is_rate_limited(),
        }
    }
}
