use crate::service::dispatcher::ServiceIdentity;
use std::env;

/// Runtime configuration for the service binary.
///
/// Everything is optional: unset variables fall back to the defaults a
/// local game harness expects.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listen address, e.g. `127.0.0.1:8000`.
    pub bind_addr: String,
    pub student_email: String,
    pub algorithm_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            student_email: "student@example.edu".to_string(),
            algorithm_name: "BeerBotBaseline".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Reads overrides from the `BEERBOT_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env::var("BEERBOT_ADDR").unwrap_or(defaults.bind_addr),
            student_email: env::var("BEERBOT_STUDENT_EMAIL").unwrap_or(defaults.student_email),
            algorithm_name: env::var("BEERBOT_ALGORITHM_NAME").unwrap_or(defaults.algorithm_name),
        }
    }

    /// The identity presented during the protocol handshake.
    pub fn identity(&self) -> ServiceIdentity {
        ServiceIdentity {
            student_email: self.student_email.clone(),
            algorithm_name: self.algorithm_name.clone(),
            ..ServiceIdentity::default()
        }
    }
}
