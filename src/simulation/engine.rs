//! The simulation aggregate
//!
//! `Simulation` owns the body system, the steering state, the thrust
//! controller and the trajectory trail. The input layer calls the `on_*`
//! handlers, the scheduler calls `tick` once per frame, and the render layer
//! reads `rocket_state` / `planet_state` / `trajectory`.
//!
//! One tick, in order:
//! 1. thrust for the held direction is written to the rocket's `f_ext`
//! 2. every body is integrated by `dt`
//! 3. the rocket's new position is recorded

use super::control::{ControlState, Direction, InputEvent};
use super::error::SimulationError;
use super::forces::AccelSet;
use super::integrator::euler_integrator;
use super::params::G;
use super::scenario::Scenario;
use super::states::{BodySystem, NVec3, PLANET, ROCKET};
use super::thrust::ThrustController;
use super::trajectory::TrajectoryRecorder;
use super::vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketState {
    pub position: NVec3,
    pub velocity: NVec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetState {
    pub position: NVec3,
}

pub struct Simulation {
    scenario: Scenario,
    system: BodySystem,
    forces: AccelSet,
    thrust: ThrustController,
    control: ControlState,
    trajectory: TrajectoryRecorder,
    ticks: u64, // ticks since the last reset
}

impl Simulation {
    /// Validate `scenario` and put the bodies in their starting positions
    pub fn new(scenario: Scenario) -> Result<Self, SimulationError> {
        scenario.validate()?;

        let mut sim = Self {
            thrust: ThrustController::new(scenario.parameters.thrust),
            trajectory: TrajectoryRecorder::new(scenario.parameters.trajectory_capacity),
            system: BodySystem::new(),
            forces: AccelSet::standard(),
            control: ControlState::Idle,
            ticks: 0,
            scenario,
        };
        sim.on_reset()?;
        Ok(sim)
    }

    pub fn on_direction_pressed(&mut self, direction: Direction) {
        self.control = self.control.on_pressed(direction);
    }

    /// Releasing the held direction stops thrust immediately
    pub fn on_direction_released(&mut self, direction: Direction) {
        let next = self.control.on_released(direction);
        if self.control.is_thrusting() && !next.is_thrusting() {
            if let Some(rocket) = self.system.rocket_mut() {
                rocket.f_ext = NVec3::zeros();
            }
        }
        self.control = next;
    }

    /// Back to the initial configuration: bodies, clock, trail and steering
    pub fn on_reset(&mut self) -> Result<(), SimulationError> {
        self.system.reset(&self.scenario.initial)?;
        self.trajectory.clear();
        self.control = ControlState::Idle;
        self.ticks = 0;
        Ok(())
    }

    /// Route one input event. `Quit` is the frame loop's business and is
    /// ignored here.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), SimulationError> {
        match event {
            InputEvent::Pressed(d) => self.on_direction_pressed(d),
            InputEvent::Released(d) => self.on_direction_released(d),
            InputEvent::Reset => self.on_reset()?,
            InputEvent::Quit => {}
        }
        Ok(())
    }

    /// Advance by one step of `dt` simulated seconds
    ///
    /// A degenerate state (coincident bodies, thrust without a heading) is
    /// returned as an error; positions and velocities are left untouched.
    pub fn tick(&mut self, dt: f64) -> Result<(), SimulationError> {
        let direction = self.control.direction();
        let rocket = self
            .system
            .rocket_mut()
            .ok_or_else(|| SimulationError::InvalidScenario("rocket slot is empty".to_string()))?;

        let f_ext = self.thrust.directional_thrust(direction, &rocket.v)?;
        rocket.f_ext = f_ext;

        euler_integrator(&mut self.system, &self.forces, dt)?;

        if let Some(rocket) = self.system.rocket() {
            self.trajectory.record(rocket.x);
        }
        self.ticks += 1;
        Ok(())
    }

    /// `tick` with the scenario's fixed step
    pub fn step(&mut self) -> Result<(), SimulationError> {
        self.tick(self.scenario.parameters.dt)
    }

    pub fn rocket_state(&self) -> RocketState {
        let body = self.system.get(ROCKET);
        RocketState {
            position: body.map_or_else(NVec3::zeros, |b| b.x),
            velocity: body.map_or_else(NVec3::zeros, |b| b.v),
        }
    }

    pub fn planet_state(&self) -> PlanetState {
        PlanetState {
            position: self.system.get(PLANET).map_or_else(NVec3::zeros, |b| b.x),
        }
    }

    pub fn trajectory(&self) -> &TrajectoryRecorder {
        &self.trajectory
    }

    /// Trail as (x, y) points for drawing, oldest first
    pub fn trajectory_2d(&mut self) -> &[[f64; 2]] {
        self.trajectory.points_2d()
    }

    pub fn control_state(&self) -> ControlState {
        self.control
    }

    pub fn system(&self) -> &BodySystem {
        &self.system
    }

    /// Place bodies by hand between ticks. Nothing here is validated; a
    /// degenerate placement surfaces as an error from the next `tick`.
    pub fn system_mut(&mut self) -> &mut BodySystem {
        &mut self.system
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated seconds since the last reset
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }

    /// Distance from the rocket to the planet's surface, m
    pub fn altitude(&self) -> f64 {
        let r = vector::diff(&self.rocket_state().position, &self.planet_state().position);
        vector::magnitude(&r) - self.scenario.parameters.planet_radius
    }

    /// Kinetic plus gravitational potential energy of the whole system, J
    ///
    /// Constant for the exact motion without thrust. The Euler step lets it
    /// drift a little every tick.
    pub fn total_energy(&self) -> f64 {
        let bodies = self.system.bodies();
        let kinetic: f64 = bodies
            .iter()
            .map(|b| 0.5 * b.mass() * b.v.norm_squared())
            .sum();

        let mut potential = 0.0;
        for (i, bi) in bodies.iter().enumerate() {
            for bj in &bodies[i + 1..] {
                let r = vector::magnitude(&vector::diff(&bj.x, &bi.x));
                potential -= G * bi.mass() * bj.mass() / r;
            }
        }
        kinetic + potential
    }
}
