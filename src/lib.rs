pub mod simulation;
pub mod configuration;
pub mod runtime;
pub mod benchmark;

pub use simulation::states::{Body, BodySystem, NVec3, BODY_CAPACITY, PLANET, ROCKET};
pub use simulation::error::{Degeneracy, SimulationError};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, ExternalForces};
pub use simulation::integrator::euler_integrator;
pub use simulation::control::{ControlState, Direction, InputEvent};
pub use simulation::thrust::ThrustController;
pub use simulation::trajectory::TrajectoryRecorder;
pub use simulation::params::{Parameters, InitialConditions, G, F9_2_THRUST};
pub use simulation::scenario::Scenario;
pub use simulation::engine::{Simulation, RocketState, PlanetState};
pub use configuration::config::{EngineConfig, ParametersConfig, BodiesConfig, ControlConfig, ScenarioConfig};
pub use runtime::frame_loop::{FrameLoop, Frame, InputSource, Renderer, LoopSummary};
pub use runtime::input::ScriptedInput;
pub use runtime::console::ConsoleRenderer;
pub use benchmark::benchmark::{bench_tick, bench_trajectory};
