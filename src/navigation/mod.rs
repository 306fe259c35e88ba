//! Navigation read-outs for the playback pipeline
//!
//! This module turns planner waypoints into animation steps and labels the
//! motion between consecutive steps for the status display.

pub mod classifier;
/// Waypoint to animation-step expansion
pub mod expander;
/// Compass labels for headings
pub mod facing;
/// Status read-out text
pub mod status;

pub use classifier::{classify, classify_raw, transition_label, MotionLabel};
pub use expander::{expand, expand_steps, expand_with, ExpandOptions};
pub use facing::{facing_label, CompassLabel};
pub use status::{describe, StatusReport};
