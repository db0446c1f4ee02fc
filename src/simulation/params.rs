//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size `dt` and the wall-clock tick budget,
//! - thrust magnitude and trajectory buffer capacity,
//! - planet radius (for altitude reporting)
//!
//! `InitialConditions` is what `reset` restores the bodies to.
//! The reference constants below are the defaults for both.

use std::time::Duration;

use super::states::NVec3;

/// Gravitational constant, CODATA 2018 (N m^2 / kg^2). Not configurable.
pub const G: f64 = 6.6743e-11;

/// Thrust of one Falcon 9 v1.2 Merlin 1D sea-level engine, N
pub const F9_2_THRUST: f64 = 981_000.0;

pub const EARTH_MASS: f64 = 5.9722e24; // kg
pub const EARTH_RADIUS: f64 = 6.3781e6; // equatorial, m
pub const ROCKET_MASS: f64 = 9.657e4; // kg
pub const ROCKET_OFFSET: [f64; 3] = [6.4981e6, 0.0, 0.0]; // m, 120 km above the surface
pub const ROCKET_VELOCITY: [f64; 3] = [0.0, 7200.0, 0.0]; // m/s, tangential

pub const DEFAULT_DT: f64 = 2.0; // simulated seconds per tick
pub const TICK_BUDGET: Duration = Duration::from_millis(20);
pub const TRAJECTORY_CAPACITY: usize = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // simulated time per tick
    pub tick_budget: Duration, // wall-clock budget per tick
    pub thrust: f64, // thrust magnitude, N
    pub trajectory_capacity: usize, // trail length
    pub planet_radius: f64, // m
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            tick_budget: TICK_BUDGET,
            thrust: F9_2_THRUST,
            trajectory_capacity: TRAJECTORY_CAPACITY,
            planet_radius: EARTH_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitialConditions {
    pub planet_mass: f64,
    pub rocket_mass: f64,
    pub rocket_position: NVec3,
    pub rocket_velocity: NVec3,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            planet_mass: EARTH_MASS,
            rocket_mass: ROCKET_MASS,
            rocket_position: NVec3::from(ROCKET_OFFSET),
            rocket_velocity: NVec3::from(ROCKET_VELOCITY),
        }
    }
}
