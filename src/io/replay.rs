//! Offline counterpart of the HTTP endpoint: replays a recorded game
//! log through the ordering policy and writes a decision log. Useful for
//! tuning policy parameters against games that already happened. No
//! simulation takes place; rows go in, orders come out.

use crate::model::role::Role;
use crate::model::state::RoleState;
use crate::strategy::traits::OrderPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// One observed week of a single role, as recorded by a game harness.
///
/// The `role` column stays a free string here: rows naming a role
/// outside the known set are still replayed, with fallback parameters,
/// matching the HTTP contract.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservedState {
    pub week: u32,
    pub role: String,
    #[serde(default)]
    pub inventory: i64,
    #[serde(default)]
    pub backlog: i64,
    #[serde(default)]
    pub incoming_orders: i64,
    #[serde(default)]
    pub arriving_shipments: i64,
}

impl ObservedState {
    fn state(&self) -> RoleState {
        RoleState {
            inventory: self.inventory,
            backlog: self.backlog,
            incoming_orders: self.incoming_orders,
            arriving_shipments: self.arriving_shipments,
        }
    }
}

/// An [`ObservedState`] row plus the order the policy places for it.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionRecord {
    pub week: u32,
    pub role: String,
    pub inventory: i64,
    pub backlog: i64,
    pub incoming_orders: i64,
    pub arriving_shipments: i64,
    pub order: u32,
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: csv::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: String, source: csv::Error },

    #[error("failed to flush {path}: {source}")]
    Flush {
        path: String,
        source: std::io::Error,
    },
}

/// Replays a recorded game log through `policy` and writes the decision
/// log next to it.
///
/// # Arguments
/// * `policy` - The ordering policy to evaluate.
/// * `input` - CSV with columns `week, role, inventory, backlog,
///   incoming_orders, arriving_shipments`.
/// * `output` - Destination CSV; same columns plus `order`.
///
/// Returns the number of rows written.
pub fn replay_csv(
    policy: &dyn OrderPolicy,
    input: &Path,
    output: &Path,
) -> Result<usize, ReplayError> {
    let read_err = |source| ReplayError::Read {
        path: input.display().to_string(),
        source,
    };
    let write_err = |source| ReplayError::Write {
        path: output.display().to_string(),
        source,
    };

    let mut reader = csv::Reader::from_path(input).map_err(read_err)?;
    let mut writer = csv::Writer::from_path(output).map_err(write_err)?;

    let mut rows = 0;
    for row in reader.deserialize::<ObservedState>() {
        let observed = row.map_err(read_err)?;
        let order = policy.calculate_order(Role::parse(&observed.role), &observed.state());

        writer
            .serialize(DecisionRecord {
                week: observed.week,
                role: observed.role,
                inventory: observed.inventory,
                backlog: observed.backlog,
                incoming_orders: observed.incoming_orders,
                arriving_shipments: observed.arriving_shipments,
                order,
            })
            .map_err(write_err)?;
        rows += 1;
    }

    // Flush the buffer to ensure all data is written.
    writer.flush().map_err(|source| ReplayError::Flush {
        path: output.display().to_string(),
        source,
    })?;
    Ok(rows)
}
