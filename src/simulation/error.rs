//! Error type shared by the simulation core.
//!
//! `CapacityExceeded`, `InvalidMass`, `InvalidTimeStep` and `InvalidScenario`
//! are caller mistakes that can be reported and recovered from.
//! `DegenerateState` means a force or thrust denominator hit zero: the tick is
//! aborted before anything is written back and the run should stop.

use std::fmt;

/// Which denominator went to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Two bodies share a position, gravity between them is undefined
    CoincidentBodies { first: usize, second: usize },
    /// Prograde/retrograde thrust needs a heading, |v| == 0 has none
    ZeroVelocity,
    /// Lateral thrust uses v x z, which vanishes when v is along z
    ParallelToAxis,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    CapacityExceeded { capacity: usize },
    InvalidMass(f64),
    InvalidTimeStep(f64),
    DegenerateState(Degeneracy),
    InvalidScenario(String),
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::CoincidentBodies { first, second } => {
                write!(f, "bodies {first} and {second} are at the same position")
            }
            Degeneracy::ZeroVelocity => write!(f, "rocket velocity is zero, thrust heading undefined"),
            Degeneracy::ParallelToAxis => write!(f, "rocket velocity is parallel to the z axis, lateral thrust undefined"),
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::CapacityExceeded { capacity } => {
                write!(f, "body capacity exceeded (max {capacity})")
            }
            SimulationError::InvalidMass(m) => write!(f, "invalid body mass {m} (must be finite and > 0)"),
            SimulationError::InvalidTimeStep(dt) => write!(f, "invalid time step {dt} (must be finite and > 0)"),
            SimulationError::DegenerateState(d) => write!(f, "degenerate state: {d}"),
            SimulationError::InvalidScenario(msg) => write!(f, "invalid scenario: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}
