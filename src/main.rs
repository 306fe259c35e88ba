// src/main.rs
// Entry point for pathsim: replays a recorded planner response on the grid,
// logging the status read-out of every frame.

use std::error::Error;

use log::{error, info};
use pathsim::planner_interface::RecordedPlanner;
use pathsim::{SimConfig, Simulator, TimerQueue};

/// Usage: `pathsim [config.yaml] <response.json>`
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, response_path) = match args.as_slice() {
        [response] => (SimConfig::default(), response),
        [config, response] => (SimConfig::from_file(config)?, response),
        _ => {
            error!("usage: pathsim [config.yaml] <response.json>");
            return Err("missing planner response file".into());
        }
    };

    let planner = RecordedPlanner::from_file(response_path)?;
    let mut simulator = Simulator::new(config, TimerQueue::new());

    let steps = simulator.run_algorithm(&planner)?;
    info!(
        "Algorithm runtime: {} ({})",
        simulator.runtime().unwrap_or("n/a"),
        simulator.config().planner.algo_type
    );
    if steps == 0 {
        info!("Planner returned no path; nothing to animate");
        return Ok(());
    }

    if let Some(status) = simulator.status() {
        info!("Step 1 / {}\n{}", steps, status);
    }

    simulator.controller_mut().play();
    loop {
        let controller = simulator.controller_mut();
        let Some(wait) = controller.scheduler().time_to_next() else {
            break;
        };
        std::thread::sleep(wait);

        let Some(handle) = controller.scheduler_mut().pop_next() else {
            break;
        };
        if let Some(frame) = controller.on_tick(handle) {
            if let Some(status) = simulator.status() {
                info!("Step {} / {}\n{}", frame.step + 1, steps, status);
            }
        }
    }

    info!("Playback complete");
    Ok(())
}
