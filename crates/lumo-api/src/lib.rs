// lumo-api: Async Rust client for the LIFX cloud HTTP API (v1 lights)

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::LightsClient;
pub use error::Error;
pub use transport::TransportConfig;
