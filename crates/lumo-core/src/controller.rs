// ── Controller abstraction ──
//
// Facade over the API client: resolves a `Command` or a query selector
// into one or more authenticated calls and aggregates the results.
// Calls within a batch run strictly one after another -- completion
// order is submission order.

use lumo_api::types::{Light, StateUpdate, StatesRequest};
use lumo_api::{LightsClient, TransportConfig};
use tracing::{debug, warn};

use crate::command::{BatchOutcome, Command, CommandOutcome, TargetResult};
use crate::config::ControllerConfig;
use crate::error::CoreError;
use crate::selector::Selector;

/// The main entry point for consumers.
pub struct Controller {
    client: LightsClient,
}

impl Controller {
    /// Create a new Controller from configuration.
    ///
    /// The credential comes in as part of the config -- there is no
    /// global token state anywhere in the workspace.
    pub fn new(config: &ControllerConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = LightsClient::new(config.api_url.as_str(), &config.token, &transport)?;
        Ok(Self { client })
    }

    /// Wrap a pre-built API client (test injection).
    pub fn from_client(client: LightsClient) -> Self {
        Self { client }
    }

    // ── Query path ───────────────────────────────────────────────────

    /// Fetch the lights matched by `selector`.
    ///
    /// A non-2xx status or an unexpected body shape is an error; an
    /// empty array is a perfectly good answer.
    pub async fn lights(&self, selector: &Selector) -> Result<Vec<Light>, CoreError> {
        let lights = self.client.list_lights(&selector.to_string()).await?;
        debug!(count = lights.len(), %selector, "fetched lights");
        Ok(lights)
    }

    // ── Write path ───────────────────────────────────────────────────

    /// Execute a write command.
    pub async fn execute(&self, command: Command) -> Result<CommandOutcome, CoreError> {
        match command {
            Command::Toggle { ids } => Ok(CommandOutcome::Batch(self.toggle_batch(ids).await)),
            Command::SetBrightness { id, value } => {
                self.set_brightness(id, &value).await?;
                Ok(CommandOutcome::Applied)
            }
        }
    }

    /// Toggle every identifier in `ids`, in order, independently.
    ///
    /// A failed target is logged and recorded, then the loop moves on --
    /// no short-circuit, no retry, no rollback. The outcome carries one
    /// entry per target.
    async fn toggle_batch(&self, ids: Vec<String>) -> BatchOutcome {
        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            let outcome = self.client.toggle(&id).await.map_err(CoreError::from);
            match &outcome {
                Ok(()) => debug!(bulb = %id, "toggled"),
                Err(e) => warn!(bulb = %id, error = %e, "toggle failed"),
            }
            results.push(TargetResult { id, outcome });
        }
        BatchOutcome { results }
    }

    /// Set one bulb's brightness via the bulk state endpoint.
    ///
    /// The value string is parsed here so a malformed number aborts
    /// before any request goes out. The parsed fraction is forwarded
    /// as-is -- the service rejects out-of-range values itself.
    async fn set_brightness(&self, id: String, value: &str) -> Result<(), CoreError> {
        let brightness: f64 = value.trim().parse().map_err(|_| CoreError::InvalidNumber {
            field: "brightness",
            value: value.to_owned(),
        })?;

        let request = StatesRequest {
            states: vec![StateUpdate {
                selector: id,
                brightness: Some(brightness),
                ..StateUpdate::default()
            }],
        };
        self.client.set_states(&request).await?;
        Ok(())
    }
}
