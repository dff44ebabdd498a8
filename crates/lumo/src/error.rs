//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use lumo_core::CoreError;

/// Exit codes for process termination.
#[allow(dead_code)]
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the lights service at {url}")]
    #[diagnostic(
        code(lumo::connection_failed),
        help("Check your network connection.\nReason: {reason}")
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(lumo::timeout),
        help("Increase --timeout or check https://status.lifx.com for service health.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────

    #[error("Access token was rejected by the service")]
    #[diagnostic(
        code(lumo::auth_failed),
        help(
            "Generate a new token at https://cloud.lifx.com/settings and pass it\n\
             with --token, the LUMO_TOKEN environment variable, or the config file."
        )
    )]
    InvalidToken,

    #[error("No access token configured")]
    #[diagnostic(
        code(lumo::no_token),
        help(
            "Pass --token, set LUMO_TOKEN, or add `token = \"...\"` to the config file.\n\
             Expected at: {path}"
        )
    )]
    MissingToken { path: String },

    // ── Service ──────────────────────────────────────────────────────

    #[error("The service refused the request (HTTP {status})")]
    #[diagnostic(code(lumo::service_error), help("Response body: {body}"))]
    Service { status: u16, body: String },

    #[error("Unexpected response from the service: {message}")]
    #[diagnostic(
        code(lumo::decode_error),
        help("The API may have changed shape; re-run with -vv to see the exchange.")
    )]
    Decode { message: String },

    // ── Batch ────────────────────────────────────────────────────────

    #[error("{failed} of {total} bulb(s) failed")]
    #[diagnostic(
        code(lumo::batch_failed),
        help("Failed: {failed_ids}\nEvery bulb was attempted; re-run with -v for per-bulb detail.")
    )]
    BatchFailed {
        failed: usize,
        total: usize,
        failed_ids: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(lumo::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration error: {message}")]
    #[diagnostic(code(lumo::config))]
    Config { message: String },

    #[error(transparent)]
    #[diagnostic(code(lumo::config))]
    ConfigFile(Box<figment::Error>),

    // ── IO / internal ────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::ConfigFile(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::InvalidToken | Self::MissingToken { .. } => exit_code::AUTH,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidNumber { field, value } => CliError::Validation {
                field: field.into(),
                reason: format!("cannot parse {value:?} as a number"),
            },

            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }

            CoreError::Timeout => CliError::Timeout,

            CoreError::InvalidToken => CliError::InvalidToken,

            CoreError::Service { status, body } => CliError::Service { status, body },

            CoreError::Decode { message } => CliError::Decode { message },

            CoreError::Config { message } => CliError::Config { message },

            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}
