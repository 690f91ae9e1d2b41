use serde::{Deserialize, Serialize};

/// The state of a single node in the supply chain, as observed by the
/// caller at decision time.
///
/// Fields are signed on purpose: the protocol accepts negative
/// observations as-is and leaves any clamping to the ordering policy's
/// final floor. Missing fields default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleState {
    /// Units on hand.
    pub inventory: i64,
    /// Unfulfilled demand owed downstream.
    pub backlog: i64,
    /// Demand just received from downstream, not yet shipped.
    pub incoming_orders: i64,
    /// Units inbound from upstream, about to arrive.
    pub arriving_shipments: i64,
}
