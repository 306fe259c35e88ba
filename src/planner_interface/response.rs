// planner_interface/response.rs

// Response from the planner's simulator endpoint.

use serde::{Deserialize, Serialize};

use crate::SimError;
use crate::core::{Pose, Step};

/// Planner output: keyframe poses (scan markers included) and the server's
/// reported runtime
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgoOutput {
    /// Keyframe poses, in planner units
    pub positions: Vec<Pose>,
    /// Server-side runtime as reported, e.g. "0.0123 seconds"
    pub runtime: String,
}

impl AlgoOutput {
    /// Decodes a JSON response body
    pub fn from_json(body: &str) -> Result<Self, SimError> {
        let output: AlgoOutput = serde_json::from_str(body)?;
        log::debug!(
            "Decoded planner response: {} positions, runtime {}",
            output.positions.len(),
            output.runtime
        );
        Ok(output)
    }

    /// Decoded waypoints in grid cells. Markers are decoded before real
    /// positions are divided by `units_per_cell`, so scaling never turns a
    /// position into a marker.
    pub fn grid_waypoints(&self, units_per_cell: f64) -> Vec<Step> {
        let scale = if units_per_cell.is_finite() && units_per_cell > 0.0 {
            units_per_cell
        } else {
            log::warn!("Ignoring invalid position scale {}", units_per_cell);
            1.0
        };
        self.positions
            .iter()
            .map(|pose| match Step::from_raw(*pose) {
                Step::Position(pose) => {
                    Step::Position(Pose::new(pose.x / scale, pose.y / scale, pose.theta))
                }
                marker => marker,
            })
            .collect()
    }
}
