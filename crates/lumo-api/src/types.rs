//! Wire types for the cloud lights API (v1).
//!
//! Response types match the JSON returned by `/v1/lights/...` endpoints.
//! Numeric fields the service may omit decode as zero via `#[serde(default)]`
//! — the wire model does not distinguish "zero" from "missing". Request
//! types are the opposite: every optional field is a presence-aware
//! `Option` that is skipped entirely when unset, because state updates are
//! partial, not full-state replacements.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ── Lights ───────────────────────────────────────────────────────────

/// One bulb's reported state — from `GET /v1/lights/{selector}`.
///
/// Read-only snapshot: constructed fresh from each query response and
/// discarded after the display pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Stable vendor-assigned identifier.
    pub id: String,
    #[serde(default)]
    pub uuid: Option<Uuid>,
    /// Human label assigned by the owner.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub connected: bool,
    /// `"on"` or `"off"`.
    #[serde(default)]
    pub power: String,
    #[serde(default)]
    pub color: Color,
    /// 0.0–1.0 fraction.
    #[serde(default)]
    pub brightness: f64,
    /// Used only for display sorting.
    #[serde(default)]
    pub group: Group,
    #[serde(default)]
    pub location: Option<Group>,
    /// Product metadata — passed through, never consulted by decision logic.
    #[serde(default)]
    pub product: Option<Product>,
    /// ISO 8601 date-time of the last check-in. Advisory only.
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub seconds_since_seen: f64,
    /// Catch-all for response fields not modeled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// HSBK color as reported by the service.
///
/// Hue in degrees (0–360), saturation 0.0–1.0, kelvin as an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub hue: f64,
    #[serde(default)]
    pub saturation: f64,
    #[serde(default)]
    pub kelvin: u32,
}

/// Group or location reference (ID + display name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Product metadata attached to a light.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub vendor_id: u32,
    #[serde(default)]
    pub product_id: u32,
    #[serde(default)]
    pub capabilities: Capabilities,
}

/// Capability flags reported per product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub has_color: bool,
    #[serde(default)]
    pub has_variable_color_temp: bool,
    #[serde(default)]
    pub has_ir: bool,
    #[serde(default)]
    pub has_multizone: bool,
}

// ── State mutation ───────────────────────────────────────────────────

/// A partial, sparse change to the bulbs matched by `selector`.
///
/// Fields left `None` are absent from the serialized form — the service
/// treats missing keys as "leave unchanged", so absence must never be
/// conflated with zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateUpdate {
    pub selector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// Envelope for `PUT /v1/lights/states`. The service only accepts the
/// wrapped collection form, even for a single mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatesRequest {
    pub states: Vec<StateUpdate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_update_skips_unset_fields() {
        let update = StateUpdate {
            selector: "d073d5000001".into(),
            brightness: Some(0.5),
            ..StateUpdate::default()
        };
        let value = serde_json::to_value(&update).expect("serialize");
        let obj = value.as_object().expect("object");

        assert_eq!(obj.len(), 2);
        assert_eq!(obj["selector"], "d073d5000001");
        assert_eq!(obj["brightness"], 0.5);
    }

    #[test]
    fn state_update_zero_brightness_is_not_absent() {
        let update = StateUpdate {
            selector: "all".into(),
            brightness: Some(0.0),
            ..StateUpdate::default()
        };
        let value = serde_json::to_value(&update).expect("serialize");

        assert_eq!(value.as_object().expect("object").len(), 2);
        assert_eq!(value["brightness"], 0.0);
    }

    #[test]
    fn light_defaults_absent_numerics_to_zero() {
        let light: Light =
            serde_json::from_value(serde_json::json!({ "id": "d073d5000001" })).expect("decode");

        assert_eq!(light.id, "d073d5000001");
        assert_eq!(light.brightness, 0.0);
        assert_eq!(light.color.hue, 0.0);
        assert_eq!(light.color.kelvin, 0);
        assert!(light.group.name.is_empty());
        assert!(light.product.is_none());
    }

    #[test]
    fn light_keeps_unmodeled_fields() {
        let light: Light = serde_json::from_value(serde_json::json!({
            "id": "d073d5000001",
            "effect": "OFF",
        }))
        .expect("decode");

        assert_eq!(light.extra["effect"], "OFF");
    }
}
