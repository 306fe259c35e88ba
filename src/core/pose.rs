// core/pose.rs

// Robot pose on the arena grid and the decoded animation step. Planner output
// overloads the position channel with a sentinel pair (-1, -1) to mark scan
// events; this module is the only place that understands that encoding.

use serde::{Deserialize, Serialize};

/// Coordinate used by the planner on both axes to mark a scan event
pub const SENTINEL_COORD: f64 = -1.0;

/// Sentinel heading meaning "scan just completed"
pub const SCAN_DONE_THETA: f64 = -1.0;

/// Heading the planner emits for "scan in progress"
pub const SCAN_START_THETA: f64 = -2.0;

/// Robot pose: grid position and heading
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Pose {
    /// Column (grid cells)
    pub x: f64,
    /// Row (grid cells)
    pub y: f64,
    /// Heading (radians, counter-clockwise from east)
    pub theta: f64,
}

impl Pose {
    /// Creates a pose from its components
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Pose { x, y, theta }
    }

    /// True when this pose is the reserved scan marker rather than a location
    pub fn is_sentinel(&self) -> bool {
        self.x == SENTINEL_COORD && self.y == SENTINEL_COORD
    }

    /// True when both coordinates are usable numbers
    pub fn has_finite_position(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One frame of the stepwise animation
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "kind")]
pub enum Step {
    /// Robot sits at a real grid position
    Position(Pose),
    /// Camera scan in progress
    ScanStart,
    /// Camera scan completed
    ScanDone,
}

impl Step {
    /// Decodes a raw planner pose, resolving the sentinel encoding.
    /// Any sentinel heading other than exactly -1 reads as "scan in progress".
    pub fn from_raw(pose: Pose) -> Self {
        if !pose.is_sentinel() {
            Step::Position(pose)
        } else if pose.theta == SCAN_DONE_THETA {
            Step::ScanDone
        } else {
            Step::ScanStart
        }
    }

    /// Re-encodes the step in the planner's wire form
    pub fn to_raw(&self) -> Pose {
        match self {
            Step::Position(pose) => *pose,
            Step::ScanStart => Pose::new(SENTINEL_COORD, SENTINEL_COORD, SCAN_START_THETA),
            Step::ScanDone => Pose::new(SENTINEL_COORD, SENTINEL_COORD, SCAN_DONE_THETA),
        }
    }

    /// The pose of a positional step
    pub fn pose(&self) -> Option<&Pose> {
        match self {
            Step::Position(pose) => Some(pose),
            _ => None,
        }
    }

    /// True for either scan marker
    pub fn is_scan(&self) -> bool {
        !matches!(self, Step::Position(_))
    }
}

impl From<Pose> for Step {
    fn from(pose: Pose) -> Self {
        Step::from_raw(pose)
    }
}

/// Most recent real position at or before `index`
pub fn last_position(steps: &[Step], index: usize) -> Option<&Pose> {
    let end = index.checked_add(1)?.min(steps.len());
    steps[..end].iter().rev().find_map(Step::pose)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_with_minus_one_heading_is_scan_done() {
        assert_eq!(Step::from_raw(Pose::new(-1.0, -1.0, -1.0)), Step::ScanDone);
    }

    #[test]
    fn sentinel_with_other_heading_is_scan_start() {
        assert_eq!(Step::from_raw(Pose::new(-1.0, -1.0, 5.0)), Step::ScanStart);
        assert_eq!(Step::from_raw(Pose::new(-1.0, -1.0, -2.0)), Step::ScanStart);
        assert_eq!(Step::from_raw(Pose::new(-1.0, -1.0, f64::NAN)), Step::ScanStart);
    }

    #[test]
    fn single_negative_coordinate_is_a_position() {
        let pose = Pose::new(-1.0, 3.0, 0.0);
        assert_eq!(Step::from_raw(pose), Step::Position(pose));
    }

    #[test]
    fn last_position_skips_scans() {
        let steps = [
            Step::Position(Pose::new(1.0, 4.0, 0.0)),
            Step::ScanStart,
            Step::ScanDone,
        ];
        assert_eq!(last_position(&steps, 2), Some(&Pose::new(1.0, 4.0, 0.0)));
        assert_eq!(last_position(&steps, 99), Some(&Pose::new(1.0, 4.0, 0.0)));
        assert_eq!(last_position(&[Step::ScanStart], 0), None);
    }

    #[test]
    fn scan_markers_keep_their_meaning_when_re_encoded() {
        for step in [Step::ScanStart, Step::ScanDone] {
            assert_eq!(Step::from_raw(step.to_raw()), step);
        }
    }
}
