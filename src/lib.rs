//! BeerBot: a stateless decision service for the beer distribution game.
//!
//! Each simulated week, the four supply-chain roles (retailer, wholesaler,
//! distributor, factory) must decide how much to order from their upstream
//! supplier. The service receives the game's current state as JSON on a
//! single endpoint and answers with one order quantity per role, computed
//! by an order-up-to policy. It holds no state between requests.

pub mod config;
pub mod io;
pub mod logging;
pub mod model;
pub mod service;
pub mod strategy;
pub mod transport;
