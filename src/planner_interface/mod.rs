//! Planner interface for pathsim
//!
//! Wire types exchanged with the remote planning server and the
//! `PlannerClient` seam the session runs requests through. Transport lives
//! outside this crate; `RecordedPlanner` replays a saved response.

mod request;
mod response;

use std::path::Path;

pub use request::*;
pub use response::*;

use crate::SimError;

/// Anything that can turn a planner request into a planner response
pub trait PlannerClient {
    /// Runs the planner on `input`
    fn run(&self, input: &AlgoInput) -> Result<AlgoOutput, SimError>;
}

/// Planner that answers every request with one recorded response
#[derive(Debug, Clone)]
pub struct RecordedPlanner {
    output: AlgoOutput,
}

impl RecordedPlanner {
    /// Wraps an already decoded response
    pub fn new(output: AlgoOutput) -> Self {
        RecordedPlanner { output }
    }

    /// Loads a JSON response saved from the planner
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let body = std::fs::read_to_string(path.as_ref())?;
        let output = AlgoOutput::from_json(&body)?;
        log::info!("Loaded recorded planner response from {}", path.as_ref().display());
        Ok(RecordedPlanner { output })
    }
}

impl PlannerClient for RecordedPlanner {
    fn run(&self, input: &AlgoInput) -> Result<AlgoOutput, SimError> {
        log::debug!(
            "Replaying recorded response for {} obstacles ({})",
            input.value.obstacles.len(),
            input.algo_type
        );
        Ok(self.output.clone())
    }
}
