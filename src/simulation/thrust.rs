//! Maps a held direction and the rocket's velocity to a thrust force
//!
//! Thrust is oriented relative to the current heading, not to world axes:
//! - `Up`    prograde,  F * v / |v|
//! - `Down`  retrograde, -F * v / |v|
//! - `Left`  -F * unit(v x z)
//! - `Right` +F * unit(v x z)
//! - `Idle`  zero
//!
//! Lateral steering uses the z axis as "up out of the orbital plane", which
//! only makes sense while all motion stays in z = 0. Scenarios are validated
//! for that when they are built.

use super::control::Direction;
use super::error::{Degeneracy, SimulationError};
use super::params::F9_2_THRUST;
use super::states::NVec3;
use super::vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustController {
    pub thrust: f64, // magnitude, N
}

impl Default for ThrustController {
    fn default() -> Self {
        Self::new(F9_2_THRUST)
    }
}

impl ThrustController {
    pub fn new(thrust: f64) -> Self {
        Self { thrust }
    }

    /// Force (N) for `direction` given the rocket velocity `v`
    pub fn directional_thrust(&self, direction: Direction, v: &NVec3) -> Result<NVec3, SimulationError> {
        let f = self.thrust;
        match direction {
            Direction::Idle => Ok(NVec3::zeros()),
            Direction::Up => along_heading(v, f),
            Direction::Down => along_heading(v, -f),
            Direction::Left => Ok(lateral(v)? * -f),
            Direction::Right => Ok(lateral(v)? * f),
        }
    }
}

/// `f * v / |v|`, evaluated per component in that order
fn along_heading(v: &NVec3, f: f64) -> Result<NVec3, SimulationError> {
    let mag = vector::magnitude(v);
    if mag == 0.0 {
        return Err(SimulationError::DegenerateState(Degeneracy::ZeroVelocity));
    }
    Ok(v.map(|c| f * c / mag))
}

fn lateral(v: &NVec3) -> Result<NVec3, SimulationError> {
    if vector::magnitude(v) == 0.0 {
        return Err(SimulationError::DegenerateState(Degeneracy::ZeroVelocity));
    }
    let side = vector::cross(v, &NVec3::z());
    vector::unit(&side).ok_or(SimulationError::DegenerateState(Degeneracy::ParallelToAxis))
}
