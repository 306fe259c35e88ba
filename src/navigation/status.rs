// navigation/status.rs

// Text read-out for the step under the cursor: where the robot is, where it
// goes next and how it gets there.

use std::fmt;

use super::classifier::{move_relative_angle, transition_label};
use super::facing::facing_label;
use crate::core::{last_position, Step};

/// Status lines for one step of the animation
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    /// Position the robot occupies at this step
    pub current: String,
    /// Position of the following step, or "End"
    pub next: String,
    /// Motion label towards the following step, or "End"
    pub direction: String,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Current Position: {}", self.current)?;
        writeln!(f, "Next Position: {}", self.next)?;
        write!(f, "Direction: {}", self.direction)
    }
}

/// Builds the read-out for `steps[index]`
pub fn describe(steps: &[Step], index: usize) -> StatusReport {
    let current = match steps.get(index) {
        Some(_) => position_text(steps, index),
        None => "N/A".to_string(),
    };

    let following = index.checked_add(1).and_then(|i| steps.get(i));
    let (next, direction) = match (steps.get(index), following) {
        (Some(_), Some(_)) => (position_text(steps, index + 1), direction_text(steps, index)),
        _ => ("End".to_string(), "End".to_string()),
    };

    StatusReport { current, next, direction }
}

/// A scan step is shown at the position the robot scanned from
fn position_text(steps: &[Step], index: usize) -> String {
    let suffix = match steps.get(index) {
        Some(Step::ScanStart) => " (Scanning)",
        Some(Step::ScanDone) => " (Scan Done)",
        _ => "",
    };
    match last_position(steps, index) {
        Some(pose) => format!(
            "({}, {}, Facing: {}){}",
            pose.x,
            pose.y,
            facing_label(Some(pose.theta)),
            suffix
        ),
        None => format!("N/A{}", suffix),
    }
}

fn direction_text(steps: &[Step], index: usize) -> String {
    let label = transition_label(steps, index);
    if !label.is_translation() {
        return label.to_string();
    }
    let from = last_position(steps, index);
    let to = steps.get(index + 1).and_then(Step::pose);
    match (from, to) {
        (Some(from), Some(to)) => match move_relative_angle(from, to) {
            Some(angle) => format!("{} (relative angle: {:.1}°)", label, angle),
            None => label.to_string(),
        },
        _ => label.to_string(),
    }
}
