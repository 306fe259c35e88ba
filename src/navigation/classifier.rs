//! Directional classifier
//!
//! Derives a human-readable motion label from two consecutive animation steps:
//! scan events first, then translation relative to the current heading, then
//! pure rotation on the spot.

use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;

use crate::core::angles::{heading_degrees, relative_angle, snap_quarter, to_degrees};
use crate::core::{last_position, Pose, Step};

/// Half-width (degrees) of the cone counted as moving straight
pub const STRAIGHT_TOLERANCE_DEG: f64 = 10.0;

/// Relative size of a heading/displacement dot product still counted as
/// perpendicular
const PERPENDICULAR_EPSILON: f64 = 1e-9;

/// Motion between two consecutive steps
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionLabel {
    /// No translation and no heading change
    Stationary,
    /// Forward within the straight cone
    Straight,
    /// Forward, bearing left of the heading
    ForwardLeft,
    /// Forward, bearing right of the heading
    ForwardRight,
    /// Backward, straight behind
    ReverseStraight,
    /// Backward, bearing left of the heading
    ReverseLeft,
    /// Backward, bearing right of the heading
    ReverseRight,
    /// Counter-clockwise heading change
    TurnLeft,
    /// Clockwise heading change
    TurnRight,
    /// Scan starts
    Scanning,
    /// Scan completed
    ScanDone,
    /// One of the steps is missing or unusable
    Unknown,
}

impl MotionLabel {
    /// Status text shown to the user
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionLabel::Stationary => "Stationary",
            MotionLabel::Straight => "Straight",
            MotionLabel::ForwardLeft => "Forward Left",
            MotionLabel::ForwardRight => "Forward Right",
            MotionLabel::ReverseStraight => "Reverse Straight",
            MotionLabel::ReverseLeft => "Reverse Left",
            MotionLabel::ReverseRight => "Reverse Right",
            MotionLabel::TurnLeft => "Turn Left",
            MotionLabel::TurnRight => "Turn Right",
            MotionLabel::Scanning => "Scanning",
            MotionLabel::ScanDone => "Scan Done",
            MotionLabel::Unknown => "Unknown",
        }
    }

    /// True for the labels that involve translation
    pub fn is_translation(&self) -> bool {
        matches!(
            self,
            MotionLabel::Straight
                | MotionLabel::ForwardLeft
                | MotionLabel::ForwardRight
                | MotionLabel::ReverseStraight
                | MotionLabel::ReverseLeft
                | MotionLabel::ReverseRight
        )
    }
}

impl fmt::Display for MotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the motion from `curr` to `next`.
///
/// Never panics: a missing step yields [`MotionLabel::Unknown`], unusable
/// geometry degrades to [`MotionLabel::Unknown`] or [`MotionLabel::Stationary`].
pub fn classify(curr: Option<&Step>, next: Option<&Step>) -> MotionLabel {
    let (curr, next) = match (curr, next) {
        (Some(curr), Some(next)) => (curr, next),
        _ => return MotionLabel::Unknown,
    };

    if let Some(label) = scan_label(curr).or_else(|| scan_label(next)) {
        return label;
    }

    match (curr, next) {
        (Step::Position(curr), Step::Position(next)) => classify_motion(curr, next),
        _ => MotionLabel::Unknown,
    }
}

/// Label for the move from `steps[index]` to `steps[index + 1]` as the
/// playback shows it.
///
/// A scan marker ahead announces itself (`Scanning`, then `ScanDone`); once a
/// scan is over the robot resumes from the position it scanned at, so the move
/// out of a scan marker is classified from the latest real position.
pub fn transition_label(steps: &[Step], index: usize) -> MotionLabel {
    let curr = steps.get(index);
    let next = index.checked_add(1).and_then(|i| steps.get(i));
    let (Some(curr), Some(next)) = (curr, next) else {
        return MotionLabel::Unknown;
    };

    if let Some(label) = scan_label(next) {
        return label;
    }
    if curr.is_scan() {
        if let Some(resume) = last_position(steps, index) {
            return classify(Some(&Step::Position(*resume)), Some(next));
        }
    }
    classify(Some(curr), Some(next))
}

/// Same rules as [`classify`] applied to undecoded planner poses
pub fn classify_raw(curr: Option<&Pose>, next: Option<&Pose>) -> MotionLabel {
    let curr = curr.map(|pose| Step::from_raw(*pose));
    let next = next.map(|pose| Step::from_raw(*pose));
    classify(curr.as_ref(), next.as_ref())
}

/// Relative bearing of the move `curr → next` against `curr`'s heading, in
/// `[-180, 180]` degrees. `None` for zero or unusable displacement.
pub fn move_relative_angle(curr: &Pose, next: &Pose) -> Option<f64> {
    let displacement = displacement(curr, next)?;
    if displacement == Vector2::zeros() {
        return None;
    }
    let theta = if curr.theta.is_finite() { curr.theta } else { 0.0 };
    let bearing = to_degrees(displacement.y.atan2(displacement.x));
    Some(relative_angle(bearing, heading_degrees(theta)))
}

fn scan_label(step: &Step) -> Option<MotionLabel> {
    match step {
        Step::ScanDone => Some(MotionLabel::ScanDone),
        Step::ScanStart => Some(MotionLabel::Scanning),
        Step::Position(_) => None,
    }
}

fn displacement(curr: &Pose, next: &Pose) -> Option<Vector2<f64>> {
    if !curr.has_finite_position() || !next.has_finite_position() {
        log::warn!("Cannot classify non-finite poses {:?} -> {:?}", curr, next);
        return None;
    }
    Some(Vector2::new(next.x - curr.x, next.y - curr.y))
}

/// Unit vector along a normalized heading, exact at the cardinals
fn heading_vector(heading_deg: f64) -> Vector2<f64> {
    if heading_deg == 0.0 {
        Vector2::new(1.0, 0.0)
    } else if heading_deg == 90.0 {
        Vector2::new(0.0, 1.0)
    } else if heading_deg == 180.0 {
        Vector2::new(-1.0, 0.0)
    } else if heading_deg == 270.0 {
        Vector2::new(0.0, -1.0)
    } else {
        let radians = heading_deg.to_radians();
        Vector2::new(radians.cos(), radians.sin())
    }
}

fn classify_motion(curr: &Pose, next: &Pose) -> MotionLabel {
    let Some(delta) = displacement(curr, next) else {
        return MotionLabel::Unknown;
    };
    if delta == Vector2::zeros() {
        return MotionLabel::Stationary;
    }
    if !curr.theta.is_finite() {
        return MotionLabel::Stationary;
    }

    let heading_deg = heading_degrees(curr.theta);
    let bearing = to_degrees(delta.y.atan2(delta.x));
    let relative = relative_angle(bearing, heading_deg);
    let mut dot = heading_vector(heading_deg).dot(&delta);
    if dot.abs() <= PERPENDICULAR_EPSILON * delta.norm() {
        dot = 0.0;
    }

    if dot > 0.0 {
        if relative.abs() < STRAIGHT_TOLERANCE_DEG {
            return MotionLabel::Straight;
        }
        if relative > 0.0 {
            return MotionLabel::ForwardLeft;
        }
        if relative < 0.0 {
            return MotionLabel::ForwardRight;
        }
    }
    if dot < 0.0 {
        if relative.abs() < STRAIGHT_TOLERANCE_DEG || relative.abs() == 180.0 {
            return MotionLabel::ReverseStraight;
        }
        if relative > 0.0 {
            return MotionLabel::ReverseLeft;
        }
        if relative < 0.0 {
            return MotionLabel::ReverseRight;
        }
    }

    turn_label(curr.theta, next.theta).unwrap_or(MotionLabel::Stationary)
}

/// Rotation direction between two headings, if they differ
fn turn_label(from: f64, to: f64) -> Option<MotionLabel> {
    if from == to || !to.is_finite() {
        return None;
    }
    let delta = snap_quarter(to_degrees((to - from + 2.0 * PI).rem_euclid(2.0 * PI)));
    if delta > 0.0 && delta <= 180.0 {
        Some(MotionLabel::TurnLeft)
    } else if delta > 180.0 && delta < 360.0 {
        Some(MotionLabel::TurnRight)
    } else {
        None
    }
}
