// ── Controller configuration ──
//
// The credential travels here, explicitly, from whatever resolved it
// (flags, environment, config file). The core never reads ambient
// process state.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Default cloud endpoint for the lights API.
pub const DEFAULT_API_URL: &str = "https://api.lifx.com";

/// Everything [`Controller`](crate::Controller) needs to talk to the
/// service. Built once at startup and read-only thereafter.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Base URL of the lights API.
    pub api_url: Url,
    /// Bearer credential presented on every request.
    pub token: SecretString,
    /// Per-request timeout enforced by the HTTP client.
    pub timeout: Duration,
}
