// navigation/expander.rs

// Turns the planner's sparse keyframes into the stepwise sequence the playback
// controller animates. Scan markers are decoded here and kept in place; no
// waypoint is ever reordered or dropped.

use crate::core::{Pose, Step};

/// Options for [`expand_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Fill multi-cell straight moves with one frame per grid cell
    pub fill_straight_moves: bool,
    /// Arena columns; fills only run between cells inside the arena
    pub grid_width: u32,
    /// Arena rows
    pub grid_height: u32,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        ExpandOptions {
            fill_straight_moves: false,
            grid_width: 20,
            grid_height: 20,
        }
    }
}

impl ExpandOptions {
    fn contains(&self, pose: &Pose) -> bool {
        (0.0..f64::from(self.grid_width)).contains(&pose.x)
            && (0.0..f64::from(self.grid_height)).contains(&pose.y)
    }
}

/// Expands waypoints into animation steps, one step per waypoint
pub fn expand(waypoints: &[Pose]) -> Vec<Step> {
    expand_with(waypoints, &ExpandOptions::default())
}

/// Expands raw planner waypoints into animation steps.
///
/// With `fill_straight_moves`, a move between two in-arena positions that
/// share a heading and differ along a single axis by more than one whole cell
/// gets a unit-cell frame for every cell in between.
pub fn expand_with(waypoints: &[Pose], options: &ExpandOptions) -> Vec<Step> {
    let steps: Vec<Step> = waypoints.iter().map(|pose| Step::from_raw(*pose)).collect();
    expand_steps(&steps, options)
}

/// Same as [`expand_with`] for waypoints that are already decoded
pub fn expand_steps(waypoints: &[Step], options: &ExpandOptions) -> Vec<Step> {
    let mut steps = Vec::with_capacity(waypoints.len());
    let mut previous: Option<Pose> = None;

    for &step in waypoints {
        if let (Some(from), Step::Position(to)) = (previous, step) {
            if options.fill_straight_moves && options.contains(&from) && options.contains(&to) {
                steps.extend(straight_fill(&from, &to).map(Step::Position));
            }
        }
        if let Step::Position(pose) = step {
            previous = Some(pose);
        }
        steps.push(step);
    }

    log::debug!("Expanded {} waypoints into {} steps", waypoints.len(), steps.len());
    steps
}

/// Intermediate unit-cell poses strictly between `from` and `to`, or nothing
/// when the move is not an axis-aligned, whole-cell, same-heading move
fn straight_fill(from: &Pose, to: &Pose) -> impl Iterator<Item = Pose> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let axis_aligned = (dx == 0.0) != (dy == 0.0);
    let distance = dx.abs() + dy.abs();
    let fill = from.theta == to.theta
        && axis_aligned
        && distance.fract() == 0.0
        && distance.is_finite()
        && distance > 1.0;

    let cells = if fill { distance as usize } else { 0 };
    let unit = |d: f64| if d == 0.0 { 0.0 } else { d.signum() };
    let (ux, uy) = (unit(dx), unit(dy));
    let origin = *from;

    (1..cells).map(move |i| {
        let i = i as f64;
        Pose::new(origin.x + ux * i, origin.y + uy * i, origin.theta)
    })
}
