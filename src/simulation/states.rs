//! Core state types for the two-body simulation.
//!
//! - `Body`: one point mass (position `x`, velocity `v`, acceleration `a`,
//!   last applied non-gravitational force `f_ext`)
//! - `BodySystem`: the fixed-capacity ordered collection of bodies plus the
//!   elapsed simulated time `t`
//!
//! Slot 0 is always the planet and slot 1 the rocket; the slot index is the
//! only handle a body has.

use nalgebra::Vector3;

use super::error::SimulationError;
use super::params::InitialConditions;

pub type NVec3 = Vector3<f64>;

/// Number of body slots in the system
pub const BODY_CAPACITY: usize = 2;
/// Slot of the planet
pub const PLANET: usize = 0;
/// Slot of the rocket
pub const ROCKET: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    m: f64, // mass, fixed for the lifetime of the body
    pub f_ext: NVec3, // external (thrust) force, N
    pub x: NVec3, // position, m
    pub v: NVec3, // velocity, m/s
    pub a: NVec3, // acceleration from the last integrate call, m/s^2
}

impl Body {
    fn at_rest(m: f64) -> Self {
        Self {
            m,
            f_ext: NVec3::zeros(),
            x: NVec3::zeros(),
            v: NVec3::zeros(),
            a: NVec3::zeros(),
        }
    }

    pub fn mass(&self) -> f64 {
        self.m
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodySystem {
    bodies: Vec<Body>, // never longer than BODY_CAPACITY
    pub t: f64, // simulated time, s
}

impl Default for BodySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl BodySystem {
    /// Empty system at t = 0
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(BODY_CAPACITY),
            t: 0.0,
        }
    }

    /// Register a body of mass `m` at rest at the origin and return its slot
    pub fn add_body(&mut self, m: f64) -> Result<usize, SimulationError> {
        if self.bodies.len() >= BODY_CAPACITY {
            return Err(SimulationError::CapacityExceeded { capacity: BODY_CAPACITY });
        }
        if !m.is_finite() || m <= 0.0 {
            return Err(SimulationError::InvalidMass(m));
        }
        self.bodies.push(Body::at_rest(m));
        Ok(self.bodies.len() - 1)
    }

    /// Restore the canonical starting configuration: planet at the origin at
    /// rest, rocket at its initial offset and velocity, all forces and
    /// accelerations zero, t = 0
    pub fn reset(&mut self, initial: &InitialConditions) -> Result<(), SimulationError> {
        self.bodies.clear();
        self.t = 0.0;

        let planet = self.add_body(initial.planet_mass)?;
        let rocket = self.add_body(initial.rocket_mass)?;
        debug_assert_eq!((planet, rocket), (PLANET, ROCKET));

        let rocket = &mut self.bodies[rocket];
        rocket.x = initial.rocket_position;
        rocket.v = initial.rocket_velocity;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable view of the populated slots; the slice cannot grow past capacity
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn get(&self, slot: usize) -> Option<&Body> {
        self.bodies.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Body> {
        self.bodies.get_mut(slot)
    }

    pub fn planet(&self) -> Option<&Body> {
        self.get(PLANET)
    }

    pub fn rocket(&self) -> Option<&Body> {
        self.get(ROCKET)
    }

    pub fn rocket_mut(&mut self) -> Option<&mut Body> {
        self.get_mut(ROCKET)
    }
}
