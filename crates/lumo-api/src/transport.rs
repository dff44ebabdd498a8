// Shared transport configuration for building reqwest::Client instances.
//
// The lights API lives behind a public CA, so there are no TLS knobs here;
// the config carries the request timeout and builds clients with the
// crate's user agent and any default headers the caller injects.

use std::time::Duration;

use crate::error::Error;

const USER_AGENT: &str = concat!("lumo/", env!("CARGO_PKG_VERSION"));

/// Transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` with additional default headers.
    ///
    /// Used by [`LightsClient`](crate::LightsClient) to inject the
    /// `Authorization: Bearer` header on every request.
    pub fn build_client_with_headers(
        &self,
        headers: reqwest::header::HeaderMap,
    ) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(Error::from)
    }
}
