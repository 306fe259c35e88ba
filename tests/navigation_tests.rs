use std::f64::consts::{FRAC_PI_2, PI};

use pathsim::navigation::{classify_raw, CompassLabel};
use pathsim::{classify, expand, facing_label, transition_label, MotionLabel, Pose, Step};
use proptest::prelude::*;
use rstest::rstest;

fn scenario_a() -> Vec<Pose> {
    vec![
        Pose::new(0.0, 0.0, 0.0),
        Pose::new(1.0, 0.0, 0.0),
        Pose::new(-1.0, -1.0, 5.0),
        Pose::new(-1.0, -1.0, -1.0),
        Pose::new(2.0, 0.0, 0.0),
    ]
}

// Grid pose facing `quarter_turns` × 90° from east
fn grid_pose((x, y): (i32, i32), quarter_turns: u8) -> Pose {
    Pose::new(x as f64, y as f64, (quarter_turns % 4) as f64 * FRAC_PI_2)
}

#[test]
fn scenario_a_labels_every_transition() {
    let steps = expand(&scenario_a());
    assert_eq!(steps.len(), 5);

    let labels: Vec<MotionLabel> = (0..4).map(|i| transition_label(&steps, i)).collect();
    assert_eq!(
        labels,
        vec![
            MotionLabel::Straight,
            MotionLabel::Scanning,
            MotionLabel::ScanDone,
            MotionLabel::Straight,
        ]
    );
}

#[test]
fn scenario_a_pairwise_classifier_checks_the_current_step_first() {
    let raw = scenario_a();
    assert_eq!(classify_raw(Some(&raw[0]), Some(&raw[1])), MotionLabel::Straight);
    assert_eq!(classify_raw(Some(&raw[1]), Some(&raw[2])), MotionLabel::Scanning);
    assert_eq!(classify_raw(Some(&raw[2]), Some(&raw[3])), MotionLabel::Scanning);
    assert_eq!(classify_raw(Some(&raw[3]), Some(&raw[4])), MotionLabel::ScanDone);
}

#[rstest]
#[case(0.0, CompassLabel::East)]
#[case(FRAC_PI_2, CompassLabel::North)]
#[case(PI, CompassLabel::West)]
#[case(3.0 * PI / 2.0, CompassLabel::South)]
#[case(-FRAC_PI_2, CompassLabel::South)]
fn cardinal_facing_labels(#[case] theta: f64, #[case] expected: CompassLabel) {
    assert_eq!(facing_label(Some(theta)), expected);
}

#[test]
fn labels_render_as_status_text() {
    assert_eq!(MotionLabel::ForwardLeft.to_string(), "Forward Left");
    assert_eq!(MotionLabel::ReverseStraight.to_string(), "Reverse Straight");
    assert_eq!(MotionLabel::ScanDone.to_string(), "Scan Done");
    assert_eq!(CompassLabel::Southwest.to_string(), "Southwest");
}

proptest! {
    #[test]
    fn perpendicular_moves_on_diagonal_headings_are_stationary(
        (x, y) in (-10i32..10, -10i32..10),
        quarter_turns in 0u8..4,
        length in 1i32..50,
        left_side in any::<bool>(),
    ) {
        let theta = PI / 4.0 + f64::from(quarter_turns) * FRAC_PI_2;
        let mut side = if left_side { (-length, length) } else { (length, -length) };
        for _ in 0..quarter_turns {
            side = (-side.1, side.0);
        }
        let curr = Step::Position(Pose::new(f64::from(x), f64::from(y), theta));
        let next = Step::Position(Pose::new(f64::from(x + side.0), f64::from(y + side.1), theta));
        prop_assert_eq!(classify(Some(&curr), Some(&next)), MotionLabel::Stationary);
    }

    #[test]
    fn same_pose_is_stationary(
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        theta in -10.0f64..10.0,
    ) {
        let step = Step::Position(Pose::new(x, y, theta));
        prop_assert_eq!(classify(Some(&step), Some(&step)), MotionLabel::Stationary);
    }

    #[test]
    fn quarter_turn_rotation_preserves_labels(
        (x, y) in (-10i32..10, -10i32..10),
        (dx, dy) in (-3i32..=3, -3i32..=3),
        heading in 0u8..4,
        next_heading in 0u8..4,
        turns in 1u8..4,
    ) {
        let curr = Step::Position(grid_pose((x, y), heading));
        let next = Step::Position(grid_pose((x + dx, y + dy), next_heading));
        let expected = classify(Some(&curr), Some(&next));

        let mut rotated_curr = (x, y);
        let mut rotated_next = (x + dx, y + dy);
        for _ in 0..turns {
            rotated_curr = (-rotated_curr.1, rotated_curr.0);
            rotated_next = (-rotated_next.1, rotated_next.0);
        }
        let curr = Step::Position(grid_pose(rotated_curr, heading + turns));
        let next = Step::Position(grid_pose(rotated_next, next_heading + turns));

        prop_assert_eq!(classify(Some(&curr), Some(&next)), expected);
    }
}
