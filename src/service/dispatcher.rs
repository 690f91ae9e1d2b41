use crate::model::role::Role;
use crate::service::request::{DecisionRequest, RequestKind, WeekRecord};
use crate::service::response::{
    DecisionResponse, HandshakeResponse, OrdersResponse, RoleOrders, Supports,
};
use crate::strategy::implementations::OrderUpToPolicy;
use crate::strategy::traits::OrderPolicy;
use tracing::debug;

/// Safe default order returned when a payload matches no known shape.
/// Non-zero so a caller that sends a malformed request is not starved.
const FALLBACK_ORDER: u32 = 10;

/// Identity presented in the handshake response.
#[derive(Debug, Clone)]
pub struct ServiceIdentity {
    pub student_email: String,
    pub algorithm_name: String,
    pub version: String,
    pub supports: Supports,
}

impl Default for ServiceIdentity {
    fn default() -> Self {
        Self {
            student_email: "student@example.edu".to_string(),
            algorithm_name: "BeerBotBaseline".to_string(),
            version: "v1.0.0".to_string(),
            supports: Supports {
                blackbox: true,
                glassbox: false,
            },
        }
    }
}

/// The request dispatcher: classifies one payload and routes it through
/// the ordering policy.
///
/// Holds no mutable state; one instance serves any number of concurrent
/// requests.
#[derive(Debug)]
pub struct DecisionService {
    identity: ServiceIdentity,
    policy: Box<dyn OrderPolicy>,
}

impl Default for DecisionService {
    fn default() -> Self {
        Self::new(ServiceIdentity::default(), Box::<OrderUpToPolicy>::default())
    }
}

impl DecisionService {
    pub fn new(identity: ServiceIdentity, policy: Box<dyn OrderPolicy>) -> Self {
        Self { identity, policy }
    }

    /// Answers one request. Infallible: every payload maps to a
    /// response, the worst case being the fallback orders.
    pub fn decide(&self, request: &DecisionRequest) -> DecisionResponse {
        let kind = request.kind();
        debug!(?kind, week = ?request.week, mode = ?request.mode, "dispatching request");

        match kind {
            RequestKind::Handshake => DecisionResponse::Handshake(self.handshake()),
            RequestKind::WeeklyStep => DecisionResponse::Orders(self.weekly_step(request)),
            RequestKind::LegacyCompat => DecisionResponse::Orders(self.legacy_compat(request)),
            RequestKind::Fallback => DecisionResponse::Orders(OrdersResponse {
                orders: RoleOrders::uniform(FALLBACK_ORDER),
            }),
        }
    }

    fn handshake(&self) -> HandshakeResponse {
        HandshakeResponse {
            ok: true,
            student_email: self.identity.student_email.clone(),
            algorithm_name: self.identity.algorithm_name.clone(),
            version: self.identity.version.clone(),
            supports: self.identity.supports,
            message: "BeerBot ready".to_string(),
        }
    }

    /// One decision per role from the freshest week entry.
    ///
    /// Only the last entry counts: the caller re-sends its whole week
    /// log every call, and the service keeps no history of its own.
    fn weekly_step(&self, request: &DecisionRequest) -> OrdersResponse {
        let empty = WeekRecord::default();
        let last = request.weeks.last().unwrap_or(&empty);

        let mut orders = RoleOrders::default();
        for role in Role::ALL {
            let state = last.state_for(role);
            orders.set(role, self.policy.calculate_order(Some(role), &state));
        }
        OrdersResponse { orders }
    }

    /// Manual-testing convenience: computes one role's order from the
    /// flat scalar fields and echoes it for all four roles. Callers that
    /// need differentiated per-role output must send `weeks`.
    fn legacy_compat(&self, request: &DecisionRequest) -> OrdersResponse {
        let role = match &request.role {
            // An unrecognized role name still computes, with fallback
            // parameters.
            Some(name) => Role::parse(name),
            None => Some(Role::Retailer),
        };
        let quantity = self.policy.calculate_order(role, &request.legacy_state());
        OrdersResponse {
            orders: RoleOrders::uniform(quantity),
        }
    }
}
