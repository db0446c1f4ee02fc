use std::time::Instant;

use crate::simulation::control::Direction;
use crate::simulation::engine::Simulation;
use crate::simulation::error::SimulationError;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;
use crate::simulation::trajectory::TrajectoryRecorder;

/// Mean wall time of one tick against the tick budget
/// Thrust direction cycles every 50 ticks so the thrust path is timed too
pub fn bench_tick(scenario: &Scenario) -> Result<(), SimulationError> {
    let ns = [1_000, 10_000, 100_000];
    let directions = [Direction::Idle, Direction::Up, Direction::Left, Direction::Down, Direction::Right];
    let budget = scenario.parameters.tick_budget.as_secs_f64();

    for n in ns {
        let mut sim = Simulation::new(scenario.clone())?;

        // Warm up
        for _ in 0..100 {
            sim.step()?;
        }
        sim.on_reset()?;

        let t0 = Instant::now();
        for i in 0..n {
            if i % 50 == 0 {
                let d = directions[(i / 50) % directions.len()];
                sim.on_direction_released(sim.control_state().direction());
                sim.on_direction_pressed(d);
            }
            sim.step()?;
        }
        let total = t0.elapsed().as_secs_f64();
        let per_tick = total / n as f64;

        println!(
            "ticks = {n:7}, total = {:8.6} s, per tick = {:10.3e} s ({:.4}% of budget)",
            total,
            per_tick,
            per_tick / budget * 100.0
        );
    }
    Ok(())
}

/// Record throughput with the trail already full, so every record evicts
pub fn bench_trajectory(capacity: usize) {
    let ns = [10_000, 100_000, 1_000_000];

    for n in ns {
        let mut trail = TrajectoryRecorder::new(capacity);
        for i in 0..capacity {
            trail.record(NVec3::new(i as f64, 0.0, 0.0));
        }

        let t0 = Instant::now();
        for i in 0..n {
            let i_f = i as f64;
            trail.record(NVec3::new(i_f.cos(), i_f.sin(), 0.0));
        }
        let dt_record = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        let points = trail.points_2d().len();
        let dt_project = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:8}, capacity = {capacity}, record = {:10.3e} s/op, project {points} points = {:8.6} s",
            dt_record / n as f64,
            dt_project
        );
    }
}
