// src/scenarios.rs
// Built-in test scenarios and the start positions offered for custom runs.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use crate::core::Pose;
use crate::planner_interface::{ObstacleDirection, ObstacleInput};

/// Test scenario sent to the planner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Scenario {
    /// Seven obstacles spread over the arena
    #[default]
    BasicMock,
    /// User-placed obstacles and a chosen start position
    Custom,
}

impl Scenario {
    /// Obstacles the scenario starts with (grid cells)
    pub fn obstacles(&self) -> Vec<ObstacleInput> {
        match self {
            Scenario::BasicMock => BASIC_MOCK_OBSTACLES.to_vec(),
            Scenario::Custom => Vec::new(),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scenario::BasicMock => write!(f, "Basic Mock"),
            Scenario::Custom => write!(f, "Custom"),
        }
    }
}

const fn obstacle(id: u32, x: i64, y: i64, d: ObstacleDirection) -> ObstacleInput {
    ObstacleInput { id, x, y, d }
}

const BASIC_MOCK_OBSTACLES: [ObstacleInput; 7] = [
    obstacle(1, 1, 15, ObstacleDirection::East),
    obstacle(2, 5, 11, ObstacleDirection::South),
    obstacle(3, 7, 5, ObstacleDirection::North),
    obstacle(4, 12, 14, ObstacleDirection::North),
    obstacle(5, 12, 2, ObstacleDirection::East),
    obstacle(6, 16, 19, ObstacleDirection::South),
    obstacle(7, 19, 8, ObstacleDirection::West),
];

/// Named start pose for custom runs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StartPosition {
    /// Menu label, e.g. "Bottom Left (North)"
    pub label: &'static str,
    /// Pose in grid cells
    pub pose: Pose,
}

/// Corner start poses on the 20x20 arena
pub const START_POSITIONS: [StartPosition; 8] = [
    StartPosition { label: "Bottom Left (North)", pose: Pose::new(0.0, 0.0, FRAC_PI_2) },
    StartPosition { label: "Bottom Left (East)", pose: Pose::new(0.0, 2.0, 0.0) },
    StartPosition { label: "Bottom Right (North)", pose: Pose::new(17.0, 0.0, FRAC_PI_2) },
    StartPosition { label: "Bottom Right (West)", pose: Pose::new(19.0, 0.0, PI) },
    StartPosition { label: "Top Left (South)", pose: Pose::new(2.0, 19.0, -FRAC_PI_2) },
    StartPosition { label: "Top Left (East)", pose: Pose::new(0.0, 19.0, 0.0) },
    StartPosition { label: "Top Right (South)", pose: Pose::new(19.0, 19.0, -FRAC_PI_2) },
    StartPosition { label: "Top Right (West)", pose: Pose::new(19.0, 17.0, PI) },
];

/// Looks a start position up by its label
pub fn start_position(label: &str) -> Option<&'static StartPosition> {
    START_POSITIONS.iter().find(|start| start.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{facing_label, CompassLabel};

    #[test]
    fn basic_mock_has_seven_unique_obstacles() {
        let obstacles = Scenario::BasicMock.obstacles();
        assert_eq!(obstacles.len(), 7);
        let mut ids: Vec<u32> = obstacles.iter().map(|o| o.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn start_labels_match_their_headings() {
        for start in START_POSITIONS.iter() {
            let facing = facing_label(Some(start.pose.theta));
            let expected = match facing {
                CompassLabel::North => "(North)",
                CompassLabel::East => "(East)",
                CompassLabel::South => "(South)",
                CompassLabel::West => "(West)",
                other => panic!("unexpected facing {:?}", other),
            };
            assert!(start.label.ends_with(expected), "{}", start.label);
        }
    }

    #[test]
    fn finds_start_by_label() {
        assert_eq!(start_position("Top Left (East)").unwrap().pose, Pose::new(0.0, 19.0, 0.0));
        assert!(start_position("Middle").is_none());
    }
}
