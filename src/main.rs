use orbsim::{ScenarioConfig, Scenario, Simulation};
use orbsim::{FrameLoop, ScriptedInput, ConsoleRenderer};
use orbsim::{bench_tick, bench_trajectory};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/
    #[arg(short, default_value = "leo.yaml")]
    file_name: String,

    /// Stop after this many ticks (overrides engine.max_ticks)
    #[arg(long)]
    ticks: Option<u64>,

    /// Don't sleep off the tick budget, run as fast as possible
    #[arg(long)]
    unpaced: bool,

    /// Print a status line every N ticks
    #[arg(long, default_value_t = 50)]
    report_every: u64,

    /// Run the tick and trajectory benchmarks instead of the simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(&scenario_cfg)?;

    if args.bench {
        bench_tick(&scenario)?;
        bench_trajectory(scenario.parameters.trajectory_capacity);
        return Ok(());
    }

    println!(
        "orbsim: {} with dt = {} s, tick budget = {:?}, {} scripted events",
        args.file_name,
        scenario.parameters.dt,
        scenario.parameters.tick_budget,
        scenario_cfg.controls.len()
    );

    let frame_loop = FrameLoop::new(scenario.parameters.tick_budget)
        .paced(!args.unpaced)
        .max_ticks(args.ticks.or(scenario.max_ticks));

    let mut sim = Simulation::new(scenario)?;
    let mut input = ScriptedInput::from_config(&scenario_cfg.controls);
    let mut renderer = ConsoleRenderer::new(args.report_every);

    let summary = frame_loop
        .run(&mut sim, &mut input, &mut renderer)
        .context("simulation stopped")?;

    println!(
        "done: {} ticks, {} over budget, {}",
        summary.ticks,
        summary.overruns,
        if summary.quit { "quit requested" } else { "tick limit reached" }
    );

    Ok(())
}
