// planner_interface/request.rs

// Request body for the planner's simulator endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Pose;

/// Which output the planner server should produce
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServerMode {
    /// Planner answers from its simulator
    #[default]
    Simulator,
    /// Planner drives the physical robot
    Live,
}

/// Search strategy requested from the planner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AlgoType {
    /// Exhaustive A* search
    #[default]
    #[serde(rename = "Exhaustive Astar")]
    ExhaustiveAstar,
    /// Euclidean-distance search
    #[serde(rename = "Euclidean")]
    Euclidean,
}

impl fmt::Display for AlgoType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlgoType::ExhaustiveAstar => write!(f, "Exhaustive Astar"),
            AlgoType::Euclidean => write!(f, "Euclidean"),
        }
    }
}

/// Side of an obstacle carrying the image; encoded as 1..=4 on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ObstacleDirection {
    /// Wire code 1
    North = 1,
    /// Wire code 2
    South = 2,
    /// Wire code 3
    East = 3,
    /// Wire code 4
    West = 4,
}

impl From<ObstacleDirection> for u8 {
    fn from(direction: ObstacleDirection) -> u8 {
        direction as u8
    }
}

impl TryFrom<u8> for ObstacleDirection {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ObstacleDirection::North),
            2 => Ok(ObstacleDirection::South),
            3 => Ok(ObstacleDirection::East),
            4 => Ok(ObstacleDirection::West),
            other => Err(format!("invalid obstacle direction {}", other)),
        }
    }
}

/// Obstacle placed on the arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleInput {
    /// Obstacle number, unique within a request
    pub id: u32,
    /// Column, in planner units
    pub x: i64,
    /// Row, in planner units
    pub y: i64,
    /// Side the image faces
    pub d: ObstacleDirection,
}

/// Payload of a planner request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgoInputValue {
    /// Obstacles to visit
    pub obstacles: Vec<ObstacleInput>,
    /// 0: task 1
    pub mode: u8,
    /// Robot pose before the run
    pub initial_position: Pose,
}

/// Full planner request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgoInput {
    /// Request category, always "obstacles"
    pub cat: String,
    /// Request payload
    pub value: AlgoInputValue,
    /// Simulator or live robot
    pub server_mode: ServerMode,
    /// Search strategy
    pub algo_type: AlgoType,
}

impl AlgoInput {
    /// Builds an obstacle request. Obstacle cells are multiplied by
    /// `multiplier` into the planner's units; the start pose stays in cells.
    pub fn obstacles(
        obstacles: &[ObstacleInput],
        initial_position: Pose,
        multiplier: i64,
        server_mode: ServerMode,
        algo_type: AlgoType,
    ) -> Self {
        let obstacles = obstacles
            .iter()
            .map(|o| ObstacleInput {
                x: o.x * multiplier,
                y: o.y * multiplier,
                ..*o
            })
            .collect();

        AlgoInput {
            cat: "obstacles".to_string(),
            value: AlgoInputValue {
                obstacles,
                mode: 0,
                initial_position,
            },
            server_mode,
            algo_type,
        }
    }
}
