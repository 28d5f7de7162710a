//! Opinion Diffusion Runner
//!
//! Loads a scenario from TOML, runs the opinion diffusion engine, and
//! writes the recorded trajectory as JSON for plotting and analysis.

use clap::Parser;
use std::process::ExitCode;

use diffusion_core::{simulate, TrajectorySpec};

mod config;
mod output;

use config::ScenarioConfig;

/// Command line arguments for the runner
#[derive(Parser, Debug)]
#[command(name = "opinion_sim")]
#[command(about = "Opinion diffusion simulator over a fixed social network")]
struct Args {
    /// Scenario file to load (defaults to scenario.toml, then built-ins)
    #[arg(long)]
    scenario: Option<String>,

    /// Override the number of update steps
    #[arg(long)]
    steps: Option<u64>,

    /// Override the seed for randomized initial conditions
    #[arg(long)]
    seed: Option<u64>,

    /// Output path for the trajectory JSON
    #[arg(long, default_value = output::DEFAULT_OUTPUT_PATH)]
    output: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut scenario = match &args.scenario {
        Some(path) => match ScenarioConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: could not load scenario {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => ScenarioConfig::load_or_default(),
    };

    if let Some(steps) = args.steps {
        scenario.simulation.steps = steps;
    }
    if let Some(seed) = args.seed {
        scenario.simulation.seed = seed;
    }

    println!("Opinion Diffusion Simulator");
    println!("===========================");
    println!("Participants: {}", scenario.network.participants());
    println!(
        "Parameters: theta={}, r={}, epsilon={}",
        scenario.parameters.theta, scenario.parameters.r, scenario.parameters.epsilon
    );
    println!("Steps: {}", scenario.simulation.steps);
    println!("Sample every: {}", scenario.simulation.sample_every);
    println!();

    let model = match scenario.network.build() {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let u0 = match scenario
        .initial
        .build(model.participants(), scenario.simulation.seed)
    {
        Ok(u0) => u0,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let spec =
        TrajectorySpec::new(scenario.simulation.steps).with_sampling(scenario.simulation.sample_every);

    let trajectory = match simulate(&u0, &model, &scenario.parameters, spec) {
        Ok(trajectory) => trajectory,
        Err(e) => {
            eprintln!("Error: simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Run complete: {} steps, {} states recorded.",
        scenario.simulation.steps,
        trajectory.len()
    );
    if let Some(last) = trajectory.final_state() {
        let mean: f64 = last.iter().sum::<f64>() / last.len() as f64;
        println!("Final mean opinion: {:.4}", mean);
    }

    let doc = output::TrajectoryDocument::from_run(
        &trajectory,
        &scenario.parameters,
        scenario.simulation.steps,
        spec.sample_every,
    );
    if let Err(e) = output::write_document(&doc, &args.output) {
        eprintln!("Error: could not write {}: {}", args.output, e);
        return ExitCode::FAILURE;
    }
    println!("Wrote {}", args.output);

    ExitCode::SUCCESS
}
