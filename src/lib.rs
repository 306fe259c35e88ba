//! Pathsim - stepwise playback of planned robot paths
//!
//! This library turns the keyframe poses returned by a remote path planner
//! into a frame-by-frame animation on a grid, labels every move for the
//! status display, and drives playback by timer, single steps or scrubbing.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Poses, animation steps and angle helpers
pub mod core;
pub mod navigation;
pub mod planner_interface;
pub mod playback;
/// Built-in scenarios and start positions
pub mod scenarios;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// Re-export commonly used items for easier access
pub use crate::core::{Pose, Step};
pub use navigation::{
    classify, expand, facing_label, transition_label, CompassLabel, MotionLabel, StatusReport,
};
pub use planner_interface::{AlgoInput, AlgoOutput, AlgoType, PlannerClient, ServerMode};
pub use playback::{Frame, PlaybackController, PlaybackMode, Scheduler, TimerHandle, TimerQueue};
pub use scenarios::Scenario;

use navigation::ExpandOptions;
use planner_interface::ObstacleInput;

/// Main configuration structure for pathsim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Animation settings
    pub playback: PlaybackConfig,
    /// Arena settings
    pub grid: GridConfig,
    /// Robot settings
    pub robot: RobotConfig,
    /// Planner request settings
    pub planner: PlannerConfig,
}

/// Animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay between auto-play frames
    pub animation_speed_ms: u64,
    /// Insert one frame per cell on long straight moves
    pub fill_straight_moves: bool,
}

/// Arena settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Columns
    pub width: u32,
    /// Rows
    pub height: u32,
    /// Planner units per grid cell for obstacle coordinates
    pub obstacle_multiplier: i64,
}

/// Robot settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    /// Pose shown before anything has played
    pub initial_pose: Pose,
}

/// Planner request settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Simulator or live robot
    pub server_mode: ServerMode,
    /// Search strategy
    pub algo_type: AlgoType,
    /// Planner units per grid cell for returned positions
    pub position_units_per_cell: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            animation_speed_ms: 150,
            fill_straight_moves: false,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            width: 20,
            height: 20,
            obstacle_multiplier: 1,
        }
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        RobotConfig {
            initial_pose: Pose::new(0.0, 0.0, std::f64::consts::FRAC_PI_2),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            server_mode: ServerMode::Simulator,
            algo_type: AlgoType::ExhaustiveAstar,
            position_units_per_cell: 1.0,
        }
    }
}

impl SimConfig {
    /// Loads and validates a YAML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let config_file = std::fs::File::open(path.as_ref())?;
        let config: SimConfig = serde_yaml::from_reader(config_file)?;
        config.validate()?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parses and validates YAML configuration text
    pub fn from_yaml_str(text: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the playback pipeline cannot work with
    pub fn validate(&self) -> Result<(), SimError> {
        if self.playback.animation_speed_ms == 0 {
            return Err(SimError::Config("animation_speed_ms must be positive".into()));
        }
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(SimError::Config("grid must have at least one cell".into()));
        }
        if self.grid.obstacle_multiplier <= 0 {
            return Err(SimError::Config("obstacle_multiplier must be positive".into()));
        }
        let units = self.planner.position_units_per_cell;
        if !(units.is_finite() && units > 0.0) {
            return Err(SimError::Config(format!(
                "position_units_per_cell must be a positive number, got {}",
                units
            )));
        }
        Ok(())
    }

    /// Delay between auto-play frames
    pub fn animation_speed(&self) -> Duration {
        Duration::from_millis(self.playback.animation_speed_ms)
    }

    /// Expansion options derived from the playback settings
    pub fn expand_options(&self) -> ExpandOptions {
        ExpandOptions {
            fill_straight_moves: self.playback.fill_straight_moves,
            grid_width: self.grid.width,
            grid_height: self.grid.height,
        }
    }
}

/// Playback session: scenario selection, planner round trip and the
/// playback controller for the returned path
pub struct Simulator<S: Scheduler> {
    config: SimConfig,
    scenario: Scenario,
    obstacles: Vec<ObstacleInput>,
    start_pose: Pose,
    runtime: Option<String>,
    controller: PlaybackController<S>,
}

impl<S: Scheduler> Simulator<S> {
    /// Creates a session on the default scenario
    pub fn new(config: SimConfig, scheduler: S) -> Self {
        let start_pose = config.robot.initial_pose;
        let controller = PlaybackController::new(scheduler, config.animation_speed(), start_pose);
        let scenario = Scenario::default();

        Simulator {
            obstacles: scenario.obstacles(),
            config,
            scenario,
            start_pose,
            runtime: None,
            controller,
        }
    }

    /// Switches scenario, discarding any loaded path
    pub fn select_scenario(&mut self, scenario: Scenario) {
        self.scenario = scenario;
        self.obstacles = scenario.obstacles();
        self.start_pose = match scenario {
            Scenario::Custom => scenarios::START_POSITIONS[0].pose,
            _ => self.config.robot.initial_pose,
        };
        self.runtime = None;
        self.controller.clear();
        self.controller.set_initial_pose(self.start_pose);
        log::info!("Selected scenario {}", scenario);
    }

    /// Picks the start pose of a custom run. Returns false for scenarios
    /// with a fixed start.
    pub fn set_start_position(&mut self, pose: Pose) -> bool {
        if self.scenario != Scenario::Custom {
            log::debug!("Start position is fixed for scenario {}", self.scenario);
            return false;
        }
        self.start_pose = pose;
        if !self.controller.state().is_loaded() {
            self.controller.set_initial_pose(pose);
        }
        true
    }

    /// Replaces the obstacle layout
    pub fn set_obstacles(&mut self, obstacles: Vec<ObstacleInput>) {
        self.obstacles = obstacles;
    }

    /// Planner request for the current scenario
    pub fn build_request(&self) -> AlgoInput {
        AlgoInput::obstacles(
            &self.obstacles,
            self.start_pose,
            self.config.grid.obstacle_multiplier,
            self.config.planner.server_mode,
            self.config.planner.algo_type,
        )
    }

    /// Sends the current scenario to `planner` and loads the returned path.
    /// Returns the number of steps loaded.
    pub fn run_algorithm<P: PlannerClient + ?Sized>(&mut self, planner: &P) -> Result<usize, SimError> {
        if self.controller.is_playing() {
            return Err(SimError::Busy);
        }
        self.runtime = None;

        let request = self.build_request();
        let output = planner.run(&request).map_err(|e| {
            log::error!("Failed to run algorithm: {}", e);
            e
        })?;
        Ok(self.install_response(output))
    }

    /// Expands and loads a planner response. Returns the number of steps.
    pub fn install_response(&mut self, output: AlgoOutput) -> usize {
        let waypoints = output.grid_waypoints(self.config.planner.position_units_per_cell);
        let steps = navigation::expand_steps(&waypoints, &self.config.expand_options());
        self.controller.load(steps);
        log::info!("Algorithm ran successfully in {}", output.runtime);
        self.runtime = Some(output.runtime);
        self.controller.total_steps()
    }

    /// Runtime reported by the last successful planner run
    pub fn runtime(&self) -> Option<&str> {
        self.runtime.as_deref()
    }

    /// Active scenario
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Obstacles sent with the next request
    pub fn obstacles(&self) -> &[ObstacleInput] {
        &self.obstacles
    }

    /// Start pose sent with the next request
    pub fn start_pose(&self) -> Pose {
        self.start_pose
    }

    /// Session configuration
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Status read-out for the current step
    pub fn status(&self) -> Option<StatusReport> {
        self.controller.status()
    }

    /// Playback controller for the loaded path
    pub fn controller(&self) -> &PlaybackController<S> {
        &self.controller
    }

    /// Mutable access to the playback controller
    pub fn controller_mut(&mut self) -> &mut PlaybackController<S> {
        &mut self.controller
    }
}

/// Pathsim error types
#[derive(Debug)]
pub enum SimError {
    /// Invalid configuration
    Config(String),
    /// File system error
    Io(String),
    /// Malformed planner payload
    Decode(String),
    /// Planner failed to produce a path
    Planner(String),
    /// Playback is running
    Busy,
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SimError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SimError::Io(msg) => write!(f, "I/O error: {}", msg),
            SimError::Decode(msg) => write!(f, "Decode error: {}", msg),
            SimError::Planner(msg) => write!(f, "Planner error: {}", msg),
            SimError::Busy => write!(f, "Playback in progress"),
        }
    }
}

impl std::error::Error for SimError {}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e.to_string())
    }
}

impl From<serde_yaml::Error> for SimError {
    fn from(e: serde_yaml::Error) -> Self {
        SimError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Decode(e.to_string())
    }
}
