pub mod states;
pub mod params;
pub mod engine;
pub mod error;
pub mod vector;
pub mod forces;
pub mod integrator;
pub mod control;
pub mod thrust;
pub mod trajectory;
pub mod scenario;
