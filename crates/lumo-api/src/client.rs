// Hand-crafted async HTTP client for the LIFX cloud lights API.
//
// Base path: /v1/
// Auth: Authorization: Bearer <token> header

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;
use crate::types::{Light, StatesRequest};

/// Transition length sent with every toggle, in seconds. The service
/// expects it as a string, not a number.
const TOGGLE_DURATION: &str = "2";

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the cloud lights API.
///
/// Holds the bearer credential as a default header; every request is
/// authenticated. One instance per process is plenty — the client is
/// stateless beyond the connection pool.
pub struct LightsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl LightsClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a bearer token and transport config.
    ///
    /// Injects `Authorization: Bearer <token>` as a default header on
    /// every request, marked sensitive so it never appears in logs.
    pub fn new(
        base_url: &str,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| Error::MalformedToken)?;
        auth_value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL and guarantee a trailing slash so relative
    /// joins of `v1/…` paths behave.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"v1/lights/all"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining `v1/…` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Fetch the lights matched by `selector`.
    ///
    /// The selector is interpolated verbatim — `all`, a bare bulb ID, or
    /// any other selector expression the service understands.
    pub async fn list_lights(&self, selector: &str) -> Result<Vec<Light>, Error> {
        self.get(&format!("v1/lights/{selector}")).await
    }

    /// Apply a batch of partial state updates.
    ///
    /// `PUT /v1/lights/states` — the service applies each entry to the
    /// bulbs its selector matches and responds with per-selector results,
    /// which we only surface at debug level.
    pub async fn set_states(&self, request: &StatesRequest) -> Result<(), Error> {
        let url = self.url("v1/lights/states");
        debug!("PUT {url}");

        let resp = self.http.put(url).json(request).send().await?;
        self.handle_empty(resp).await
    }

    /// Toggle one bulb's power with the fixed transition duration.
    pub async fn toggle(&self, id: &str) -> Result<(), Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            duration: &'a str,
        }

        let url = self.url(&format!("v1/lights/id:{id}/toggle"));
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(&Body {
                duration: TOGGLE_DURATION,
            })
            .send()
            .await?;
        self.handle_empty(resp).await
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            debug!(%status, %body, "request accepted");
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::InvalidToken;
        }

        let raw = resp.text().await.unwrap_or_default();
        Error::Api {
            status: status.as_u16(),
            body: if raw.is_empty() {
                status.to_string()
            } else {
                raw
            },
        }
    }
}
