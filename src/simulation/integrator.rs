//! Fixed-step explicit Euler integrator for the body system
//!
//! Accelerations for every body are computed from the positions at the start
//! of the step, then each body is advanced velocity-first:
//!   v_n+1 = v_n + dt * a_n
//!   x_n+1 = x_n + dt * v_n+1
//! The scheme is first order and does not conserve energy; keep the update
//! order as is, reference trajectories depend on it.

use super::error::SimulationError;
use super::forces::AccelSet;
use super::states::{BodySystem, NVec3, BODY_CAPACITY};

/// Advance `sys` by one step of `dt` seconds
///
/// On error nothing in `sys` has been modified.
pub fn euler_integrator(sys: &mut BodySystem, forces: &AccelSet, dt: f64) -> Result<(), SimulationError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SimulationError::InvalidTimeStep(dt));
    }

    let n = sys.len();
    if n == 0 { // no bodies, only time moves
        sys.t += dt;
        return Ok(());
    }

    // a_n for every body, from the untouched state
    let mut scratch = [NVec3::zeros(); BODY_CAPACITY];
    let accels = &mut scratch[..n];
    forces.accumulate_accels(sys, accels)?;

    for (b, a) in sys.bodies_mut().iter_mut().zip(accels.iter()) {
        b.a = *a;
        b.v += b.a * dt;
        b.x += b.v * dt;
    }

    sys.t += dt;
    Ok(())
}
