//! Domain layer between `lumo-api` and the CLI.
//!
//! This crate owns the decision logic of the workspace:
//!
//! - **[`Controller`]** — facade over the API client. Built from an explicit
//!   [`ControllerConfig`] (the bearer credential is injected, never read from
//!   ambient state). Reads go through [`Controller::lights`]; writes go
//!   through [`Controller::execute`] with a [`Command`].
//!
//! - **[`Command`]** — typed mutation requests. A toggle batch walks its
//!   targets sequentially, never aborts early, and reports a
//!   [`BatchOutcome`] with one [`TargetResult`] per target.
//!
//! - **[`Selector`]** — how a query or mutation addresses bulbs: everything
//!   visible to the credential, or one explicit identifier.
//!
//! - **[`listing`]** — the display pipeline: stable sort by group name,
//!   then projection into fixed-format [`LightRow`]s for the presentation
//!   layer to render.

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod listing;
pub mod selector;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{BatchOutcome, Command, CommandOutcome, TargetResult};
pub use config::{ControllerConfig, DEFAULT_API_URL};
pub use controller::Controller;
pub use error::CoreError;
pub use listing::{LightRow, build_rows, sort_by_group};
pub use selector::Selector;

// Re-export wire types at the crate root for ergonomics.
pub use lumo_api::types::{Capabilities, Color, Group, Light, Product, StateUpdate, StatesRequest};
