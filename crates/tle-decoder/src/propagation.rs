//! Propagation seam
//!
//! No propagator is wired in. [`propagate`] always fails with
//! [`PropagationError::NotImplemented`] so callers never mistake a
//! placeholder for a state vector.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::OrbitalElementRecord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropagationError {
    #[error("propagation is not implemented (requested {name} at {at})")]
    NotImplemented { name: String, at: DateTime<Utc> },
}

/// Position (km) and velocity (km/s) in the TEME frame at `epoch`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StateVector {
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub velocity_z: f64,
    pub epoch: DateTime<Utc>,
}

pub fn propagate(
    record: &OrbitalElementRecord,
    at: DateTime<Utc>,
) -> Result<StateVector, PropagationError> {
    Err(PropagationError::NotImplemented {
        name: record.name.clone(),
        at,
    })
}

impl OrbitalElementRecord {
    pub fn propagate(&self, at: DateTime<Utc>) -> Result<StateVector, PropagationError> {
        propagate(self, at)
    }
}
