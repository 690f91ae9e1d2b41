use serde::{Deserialize, Serialize};

/// One stage of the four-stage supply chain.
///
/// The wire protocol names roles in lower case; parsing accepts any
/// casing. The declaration order (downstream to upstream) is the fixed
/// order used for response layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Retailer,
    Wholesaler,
    Distributor,
    Factory,
}

impl Role {
    /// All four roles, in fixed response order.
    pub const ALL: [Role; 4] = [
        Role::Retailer,
        Role::Wholesaler,
        Role::Distributor,
        Role::Factory,
    ];

    /// Case-insensitive parse. `None` for anything outside the closed
    /// set; callers decide whether that means fallback parameters or a
    /// default role.
    pub fn parse(name: &str) -> Option<Role> {
        match name.to_ascii_lowercase().as_str() {
            "retailer" => Some(Role::Retailer),
            "wholesaler" => Some(Role::Wholesaler),
            "distributor" => Some(Role::Distributor),
            "factory" => Some(Role::Factory),
            _ => None,
        }
    }

    /// The lower-cased wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Retailer => "retailer",
            Role::Wholesaler => "wholesaler",
            Role::Distributor => "distributor",
            Role::Factory => "factory",
        }
    }
}
