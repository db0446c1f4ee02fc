//! Fixed-budget real-time loop around a `Simulation`
//!
//! Each tick: poll input, apply the events (Quit stops the loop), step the
//! simulation by its fixed `dt`, hand a `Frame` to the renderer, then sleep
//! off whatever is left of the tick budget. A tick that overruns its budget
//! is followed immediately by the next one; simulated time per tick never
//! changes.

use std::thread;
use std::time::{Duration, Instant};

use crate::simulation::control::{Direction, InputEvent};
use crate::simulation::engine::{PlanetState, RocketState, Simulation};
use crate::simulation::error::SimulationError;

/// Supplies the input events for a tick
pub trait InputSource {
    /// Push the events for tick number `tick` (0-based, counted by the loop)
    fn poll(&mut self, tick: u64, events: &mut Vec<InputEvent>);
}

/// Consumes one frame of simulation output per tick
pub trait Renderer {
    fn present(&mut self, frame: &Frame<'_>);
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub tick: u64, // loop tick
    pub since_reset: u64, // simulation ticks since the last reset
    pub t: f64, // simulated time since the last reset
    pub rocket: RocketState,
    pub planet: PlanetState,
    pub direction: Direction,
    pub altitude: f64,
    pub energy: f64,
    pub trail: &'a [[f64; 2]],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopSummary {
    pub ticks: u64,
    pub overruns: u64, // ticks that took longer than the budget
    pub quit: bool, // stopped by a Quit event rather than the tick limit
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLoop {
    pub budget: Duration,
    pub paced: bool, // false: never sleep, run as fast as possible
    pub max_ticks: Option<u64>,
}

impl FrameLoop {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            paced: true,
            max_ticks: None,
        }
    }

    pub fn paced(mut self, paced: bool) -> Self {
        self.paced = paced;
        self
    }

    pub fn max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn run<I, R>(&self, sim: &mut Simulation, input: &mut I, renderer: &mut R) -> Result<LoopSummary, SimulationError>
    where
        I: InputSource,
        R: Renderer,
    {
        let mut summary = LoopSummary::default();
        let mut events = Vec::new();

        loop {
            if self.max_ticks.is_some_and(|max| summary.ticks >= max) {
                break;
            }
            let start = Instant::now();

            events.clear();
            input.poll(summary.ticks, &mut events);
            for &event in &events {
                if event == InputEvent::Quit {
                    summary.quit = true;
                    return Ok(summary);
                }
                sim.handle_event(event)?;
            }

            sim.step()?;
            summary.ticks += 1;

            let rocket = sim.rocket_state();
            let planet = sim.planet_state();
            let direction = sim.control_state().direction();
            let altitude = sim.altitude();
            let energy = sim.total_energy();
            let t = sim.elapsed();
            let frame = Frame {
                tick: summary.ticks,
                since_reset: sim.ticks(),
                t,
                rocket,
                planet,
                direction,
                altitude,
                energy,
                trail: sim.trajectory_2d(),
            };
            renderer.present(&frame);

            let elapsed = start.elapsed();
            if elapsed > self.budget {
                summary.overruns += 1;
            } else if self.paced {
                thread::sleep(self.budget - elapsed);
            }
        }

        Ok(summary)
    }
}
