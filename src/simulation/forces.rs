//! Acceleration contributors for the body system
//!
//! Every term reads the same frozen `BodySystem` and adds into a per-body
//! output buffer, so no body sees another body's already-updated state.
//! Gravity is a direct sum over ordered pairs; external (thrust) forces are
//! a separate term.

use super::error::{Degeneracy, SimulationError};
use super::params::G;
use super::states::{BodySystem, NVec3};
use super::vector;

/// Collection of acceleration terms (gravity, thrust, ...)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Gravity plus each body's external force, the set every tick uses
    pub fn standard() -> Self {
        Self::new().with(NewtonianGravity).with(ExternalForces)
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &BodySystem, out: &mut [NVec3]) -> Result<(), SimulationError> {
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, out)?;
        }
        Ok(())
    }
}

/// Acceleration source operating on a [`BodySystem`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &BodySystem, out: &mut [NVec3]) -> Result<(), SimulationError>;
}

/// Unsoftened Newtonian gravity, summed over every ordered pair (i, j), i != j
///
/// Zero separation is reported as [`Degeneracy::CoincidentBodies`] instead of
/// producing infinities.
pub struct NewtonianGravity;

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &BodySystem, out: &mut [NVec3]) -> Result<(), SimulationError> {
        let bodies = sys.bodies();

        for (i, (bi, ai)) in bodies.iter().zip(out.iter_mut()).enumerate() {
            let mut f_net = NVec3::zeros();

            for (j, bj) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }

                // r points from i to j, so i is pulled along +r
                let r = vector::diff(&bj.x, &bi.x);
                let r_mag = vector::magnitude(&r);
                if r_mag == 0.0 {
                    return Err(SimulationError::DegenerateState(Degeneracy::CoincidentBodies {
                        first: i,
                        second: j,
                    }));
                }

                // |F| = G m_i m_j / |r|^2, along r / |r|
                let f_g = G * bi.mass() * bj.mass() / (r_mag * r_mag);
                f_net += r.map(|c| f_g * c / r_mag);
            }

            *ai += f_net / bi.mass();
        }
        Ok(())
    }
}

/// `f_ext / m` for every body. Only the rocket ever carries a non-zero force.
pub struct ExternalForces;

impl Acceleration for ExternalForces {
    fn acceleration(&self, sys: &BodySystem, out: &mut [NVec3]) -> Result<(), SimulationError> {
        for (b, a) in sys.bodies().iter().zip(out.iter_mut()) {
            *a += b.f_ext / b.mass();
        }
        Ok(())
    }
}
