//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – step size, real-time tick budget, optional tick limit
//! - [`ParametersConfig`] – thrust, trail length and planet radius
//! - [`BodiesConfig`]     – planet mass and the rocket's initial state
//! - [`ControlConfig`]    – scripted input events, by tick
//!
//! Every section (and every field) falls back to the reference values in
//! `simulation::params` when it is left out. The gravitational constant is
//! not part of the file.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   dt: 2.0                 # simulated seconds per tick
//!   tick_budget_ms: 20      # wall-clock budget per tick
//!   max_ticks: 3000         # optional, run forever when absent
//!
//! parameters:
//!   thrust: 981000.0        # N
//!   trajectory_capacity: 1024
//!   planet_radius: 6.3781e6 # m
//!
//! bodies:
//!   planet:
//!     m: 5.9722e24
//!   rocket:
//!     m: 9.657e4
//!     x: [6.4981e6, 0.0, 0.0]
//!     v: [0.0, 7200.0, 0.0]
//!
//! controls:
//!   - { tick: 100, action: press, direction: up }
//!   - { tick: 160, action: release, direction: up }
//!   - { tick: 2000, action: reset }
//!   - { tick: 2500, action: quit }
//! ```

use serde::Deserialize;

use crate::simulation::control::{Direction, InputEvent};
use crate::simulation::params::{
    DEFAULT_DT, EARTH_MASS, EARTH_RADIUS, F9_2_THRUST, ROCKET_MASS, ROCKET_OFFSET, ROCKET_VELOCITY,
    TICK_BUDGET, TRAJECTORY_CAPACITY,
};

/// Run-loop settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub dt: f64, // simulated time per tick, s
    pub tick_budget_ms: u64, // wall-clock budget per tick
    pub max_ticks: Option<u64>, // stop after this many ticks
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            tick_budget_ms: TICK_BUDGET.as_millis() as u64,
            max_ticks: None,
        }
    }
}

/// Physical and buffer parameters
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub thrust: f64, // engine thrust, N
    pub trajectory_capacity: usize, // number of trail points kept
    pub planet_radius: f64, // m
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            thrust: F9_2_THRUST,
            trajectory_capacity: TRAJECTORY_CAPACITY,
            planet_radius: EARTH_RADIUS,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    pub m: f64, // mass, kg. The planet always starts at the origin at rest
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self { m: EARTH_MASS }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RocketConfig {
    pub m: f64, // mass, kg
    pub x: [f64; 3], // initial position, m
    pub v: [f64; 3], // initial velocity, m/s
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            m: ROCKET_MASS,
            x: ROCKET_OFFSET,
            v: ROCKET_VELOCITY,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct BodiesConfig {
    pub planet: PlanetConfig,
    pub rocket: RocketConfig,
}

/// Steering directions as written in the file
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DirectionConfig {
    Left,
    Right,
    Up,
    Down,
}

impl From<DirectionConfig> for Direction {
    fn from(d: DirectionConfig) -> Self {
        match d {
            DirectionConfig::Left => Direction::Left,
            DirectionConfig::Right => Direction::Right,
            DirectionConfig::Up => Direction::Up,
            DirectionConfig::Down => Direction::Down,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ActionConfig {
    Press { direction: DirectionConfig },
    Release { direction: DirectionConfig },
    Reset,
    Quit,
}

impl From<ActionConfig> for InputEvent {
    fn from(a: ActionConfig) -> Self {
        match a {
            ActionConfig::Press { direction } => InputEvent::Pressed(direction.into()),
            ActionConfig::Release { direction } => InputEvent::Released(direction.into()),
            ActionConfig::Reset => InputEvent::Reset,
            ActionConfig::Quit => InputEvent::Quit,
        }
    }
}

/// One scripted input event, delivered at the start of tick `tick`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlConfig {
    pub tick: u64,
    #[serde(flatten)]
    pub action: ActionConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: BodiesConfig,
    pub controls: Vec<ControlConfig>,
}
