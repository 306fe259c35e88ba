// core/mod.rs

// Shared value types for the playback pipeline: poses, decoded animation steps,
// and the angle helpers both the classifier and the compass labels depend on.

pub mod angles;
/// Grid poses and decoded animation steps
pub mod pose;

pub use pose::{last_position, Pose, Step, SCAN_DONE_THETA, SCAN_START_THETA, SENTINEL_COORD};
