use crate::model::role::Role;
use crate::model::state::RoleState;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// The single inbound payload: a union of four request shapes
/// distinguished only by which optional fields are present.
///
/// Deserialization is total. The protocol never rejects a request over a
/// malformed optional field; unusable values collapse to their neutral
/// defaults instead (0, empty mapping, absent). See [`RequestKind`] for
/// how a payload is classified.
#[derive(Debug, Clone, Default)]
pub struct DecisionRequest {
    // Handshake
    pub handshake: bool,
    pub ping: Option<String>,
    pub seed: Option<i64>,

    // Weekly step
    pub mode: Option<String>,
    pub week: Option<i64>,
    pub weeks_total: Option<i64>,
    pub weeks: Vec<WeekRecord>,

    // Legacy single-role scalars
    pub inventory: Option<i64>,
    pub backlog: Option<i64>,
    pub incoming_orders: Option<i64>,
    pub arriving_shipments: Option<i64>,
    pub role: Option<String>,
    pub week_compat: Option<i64>,
}

/// One entry of the caller's week log: the per-role state block.
/// Anything else the caller recorded for the week is ignored.
#[derive(Debug, Clone, Default)]
pub struct WeekRecord {
    pub roles: HashMap<Role, RoleState>,
}

impl WeekRecord {
    /// The observed state for a role, all zeros if the week carries none.
    pub fn state_for(&self, role: Role) -> RoleState {
        self.roles.get(&role).copied().unwrap_or_default()
    }
}

/// Which of the four request shapes a payload resolved to.
///
/// Classification runs once, in strict priority order, before any
/// business logic; first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Protocol handshake: return the capability descriptor.
    Handshake,
    /// Weekly decision step over the caller's week log.
    WeeklyStep,
    /// Single-role call built from the legacy scalar fields.
    LegacyCompat,
    /// Nothing recognizable: answer with the safe default orders.
    Fallback,
}

impl DecisionRequest {
    /// Classifies the payload by field presence.
    pub fn kind(&self) -> RequestKind {
        if self.handshake {
            RequestKind::Handshake
        } else if !self.weeks.is_empty() {
            RequestKind::WeeklyStep
        } else if self.has_legacy_scalars() {
            RequestKind::LegacyCompat
        } else {
            RequestKind::Fallback
        }
    }

    fn has_legacy_scalars(&self) -> bool {
        self.role.is_some()
            || self.inventory.is_some()
            || self.backlog.is_some()
            || self.incoming_orders.is_some()
            || self.arriving_shipments.is_some()
    }

    /// The `RoleState` described by the legacy scalar fields.
    pub fn legacy_state(&self) -> RoleState {
        RoleState {
            inventory: self.inventory.unwrap_or(0),
            backlog: self.backlog.unwrap_or(0),
            incoming_orders: self.incoming_orders.unwrap_or(0),
            arriving_shipments: self.arriving_shipments.unwrap_or(0),
        }
    }

    /// Total coercion from arbitrary JSON. Non-object payloads produce
    /// the default (empty) request, which classifies as `Fallback`.
    pub fn from_value(value: &Value) -> DecisionRequest {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return DecisionRequest::default(),
        };

        DecisionRequest {
            handshake: obj
                .get("handshake")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            ping: field_string(obj, "ping"),
            seed: field_int(obj, "seed"),
            mode: field_string(obj, "mode"),
            week: field_int(obj, "week"),
            weeks_total: field_int(obj, "weeks_total"),
            weeks: obj.get("weeks").map(parse_weeks).unwrap_or_default(),
            inventory: field_int(obj, "inventory"),
            backlog: field_int(obj, "backlog"),
            incoming_orders: field_int(obj, "incoming_orders"),
            arriving_shipments: field_int(obj, "arriving_shipments"),
            role: field_string(obj, "role"),
            week_compat: field_int(obj, "week_compat"),
        }
    }
}

impl<'de> Deserialize<'de> for DecisionRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(DecisionRequest::from_value(&value))
    }
}

fn parse_weeks(value: &Value) -> Vec<WeekRecord> {
    match value.as_array() {
        Some(items) => items.iter().map(parse_week).collect(),
        // A `weeks` field that is not a sequence is treated as absent.
        None => Vec::new(),
    }
}

fn parse_week(value: &Value) -> WeekRecord {
    let mut roles = HashMap::new();
    if let Some(block) = value.get("roles").and_then(Value::as_object) {
        for (name, entry) in block {
            // Keys outside the closed role set are ignored; lookup is
            // case-insensitive, last duplicate wins.
            if let Some(role) = Role::parse(name) {
                roles.insert(role, coerce_state(entry));
            }
        }
    }
    WeekRecord { roles }
}

fn coerce_state(value: &Value) -> RoleState {
    RoleState {
        inventory: int_or_zero(value.get("inventory")),
        backlog: int_or_zero(value.get("backlog")),
        incoming_orders: int_or_zero(value.get("incoming_orders")),
        arriving_shipments: int_or_zero(value.get("arriving_shipments")),
    }
}

fn int_or_zero(value: Option<&Value>) -> i64 {
    value.and_then(as_i64).unwrap_or(0)
}

/// Numeric coercion: integers as-is, floats truncated toward zero,
/// numeric strings parsed. Everything else is not a number.
fn as_i64(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if let Some(f) = value.as_f64() {
        return Some(f as i64);
    }
    value.as_str().and_then(|s| s.trim().parse::<i64>().ok())
}

fn field_int(obj: &serde_json::Map<String, Value>, key: &str) -> Option<i64> {
    obj.get(key).and_then(as_i64)
}

fn field_string(obj: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(|s| s.to_owned())
}
