//! Build validated simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`:
//! - numerical parameters (`Parameters`)
//! - the initial conditions `reset` restores (`InitialConditions`)
//! - the run-loop tick limit, if any
//!
//! Preconditions the physics core does not guard against at runtime are
//! checked here: the rocket must start away from the planet, moving, and in
//! the z = 0 plane.

use std::time::Duration;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::error::SimulationError;
use crate::simulation::params::{InitialConditions, Parameters};
use crate::simulation::states::NVec3;
use crate::simulation::vector;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scenario {
    pub parameters: Parameters,
    pub initial: InitialConditions,
    pub max_ticks: Option<u64>,
}

impl Scenario {
    /// The reference configuration: low Earth orbit at 120 km, 7.2 km/s
    pub fn reference() -> Self {
        Self::default()
    }

    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimulationError> {
        let e_cfg = &cfg.engine;
        let p_cfg = &cfg.parameters;

        let parameters = Parameters {
            dt: e_cfg.dt,
            tick_budget: Duration::from_millis(e_cfg.tick_budget_ms),
            thrust: p_cfg.thrust,
            trajectory_capacity: p_cfg.trajectory_capacity,
            planet_radius: p_cfg.planet_radius,
        };

        let rocket = &cfg.bodies.rocket;
        let initial = InitialConditions {
            planet_mass: cfg.bodies.planet.m,
            rocket_mass: rocket.m,
            rocket_position: NVec3::from(rocket.x),
            rocket_velocity: NVec3::from(rocket.v),
        };

        let scenario = Self {
            parameters,
            initial,
            max_ticks: e_cfg.max_ticks,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let p = &self.parameters;
        let init = &self.initial;

        if !p.dt.is_finite() || p.dt <= 0.0 {
            return Err(SimulationError::InvalidTimeStep(p.dt));
        }
        if p.tick_budget.is_zero() {
            return Err(invalid("tick budget must be positive"));
        }
        if !p.thrust.is_finite() || p.thrust <= 0.0 {
            return Err(invalid(format!("thrust must be positive, got {}", p.thrust)));
        }
        if p.trajectory_capacity == 0 {
            return Err(invalid("trajectory capacity must be at least 1"));
        }
        if !p.planet_radius.is_finite() || p.planet_radius < 0.0 {
            return Err(invalid(format!("planet radius must be non-negative, got {}", p.planet_radius)));
        }
        for m in [init.planet_mass, init.rocket_mass] {
            if !m.is_finite() || m <= 0.0 {
                return Err(SimulationError::InvalidMass(m));
            }
        }

        // the planet sits at the origin, so the offset is the separation
        if vector::magnitude(&init.rocket_position) == 0.0 {
            return Err(invalid("rocket starts at the planet's centre"));
        }
        if vector::magnitude(&init.rocket_velocity) == 0.0 {
            return Err(invalid("rocket starts with zero velocity, thrust heading undefined"));
        }
        if init.rocket_position.z != 0.0 || init.rocket_velocity.z != 0.0 {
            return Err(invalid("rocket must start in the z = 0 plane"));
        }
        if init.rocket_position.iter().chain(init.rocket_velocity.iter()).any(|c| !c.is_finite()) {
            return Err(invalid("rocket initial state must be finite"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> SimulationError {
    SimulationError::InvalidScenario(msg.into())
}
