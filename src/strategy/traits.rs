use crate::model::role::Role;
use crate::model::state::RoleState;
use std::fmt::Debug;

/// Defines the decision-making logic for a supply chain role.
///
/// We require `Debug` so we can print the policy if needed.
/// We require `Send` + `Sync` so one policy instance can serve
/// concurrent requests without coordination; implementations must be
/// pure functions of their inputs.
pub trait OrderPolicy: Debug + Send + Sync {
    /// Calculates how much the given role should order from its
    /// upstream supplier.
    ///
    /// # Arguments
    /// * `role` - The deciding role, or `None` when the caller named a
    ///   role outside the known set (fallback parameters apply).
    /// * `state` - The role's observed state this week.
    ///
    /// The result is always a non-negative quantity.
    fn calculate_order(&self, role: Option<Role>, state: &RoleState) -> u32;
}
