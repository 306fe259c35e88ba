use std::time::Duration;

use mockall::mock;
use mockall::predicate::eq;
use pathsim::{
    expand, MotionLabel, PlaybackController, PlaybackMode, Pose, Scheduler, Step, TimerHandle,
    TimerQueue,
};

const SPEED: Duration = Duration::from_millis(150);

mock! {
    pub Timers {}
    impl Scheduler for Timers {
        fn schedule(&mut self, delay: Duration) -> TimerHandle;
        fn cancel(&mut self, handle: TimerHandle);
    }
}

fn five_steps() -> Vec<Step> {
    (0..5)
        .map(|x| Step::Position(Pose::new(x as f64, 0.0, 0.0)))
        .collect()
}

fn controller() -> PlaybackController<TimerQueue> {
    let mut controller = PlaybackController::new(TimerQueue::new(), SPEED, Pose::new(0.0, 0.0, 0.0));
    controller.load(five_steps());
    controller
}

/// Drives the queue the way the binary does: fire the earliest timer, hand
/// it to the controller
fn tick(controller: &mut PlaybackController<TimerQueue>) -> Option<usize> {
    let handle = controller.scheduler_mut().pop_next()?;
    controller.on_tick(handle);
    Some(controller.current_step())
}

#[test]
fn auto_play_stops_on_the_last_step_after_four_ticks() {
    let mut timers = MockTimers::new();
    let mut issued = 0;
    timers
        .expect_schedule()
        .with(eq(SPEED))
        .times(4)
        .returning(move |_| {
            issued += 1;
            TimerHandle::new(issued)
        });
    timers.expect_cancel().never();

    let mut controller = PlaybackController::new(timers, SPEED, Pose::new(0.0, 0.0, 0.0));
    controller.load(five_steps());
    assert!(controller.play());

    for id in 1..=4 {
        let frame = controller.on_tick(TimerHandle::new(id)).unwrap();
        assert_eq!(frame.step, id as usize);
    }

    assert_eq!(controller.current_step(), 4);
    assert_eq!(controller.mode(), PlaybackMode::Idle);
    assert_eq!(controller.pending_timer(), None);
    // a fifth tick is never armed, and a replayed one is ignored
    assert_eq!(controller.on_tick(TimerHandle::new(4)), None);
    assert_eq!(controller.current_step(), 4);
}

#[test]
fn timer_queue_runs_dry_at_the_end() {
    let mut controller = controller();
    controller.play();

    let visited: Vec<usize> = std::iter::from_fn(|| tick(&mut controller)).collect();
    assert_eq!(visited, vec![1, 2, 3, 4]);
    assert_eq!(controller.scheduler().pending(), 0);
    assert_eq!(controller.scheduler().now(), SPEED * 4);
    assert!(!controller.play());
}

#[test]
fn pause_right_after_play_never_advances() {
    let mut controller = controller();
    controller.play();
    controller.pause();

    assert!(controller.scheduler_mut().advance(Duration::from_secs(10)).is_empty());
    assert_eq!(controller.current_step(), 0);
    assert_eq!(controller.mode(), PlaybackMode::Idle);
}

#[test]
fn late_tick_after_pause_is_ignored() {
    let mut controller = controller();
    controller.play();
    let stale = controller.pending_timer().unwrap();
    controller.pause();

    assert_eq!(controller.on_tick(stale), None);
    assert_eq!(controller.current_step(), 0);
}

#[test]
fn pause_is_idempotent() {
    let mut controller = controller();
    controller.play();
    tick(&mut controller);
    controller.pause();
    let once = controller.state().clone();
    controller.pause();

    assert_eq!(controller.state(), &once);
    assert_eq!(controller.pending_timer(), None);
}

#[test]
fn load_resets_from_any_state() {
    let mut controller = controller();
    controller.scrub_to(3);
    controller.load(five_steps());
    assert_eq!((controller.current_step(), controller.mode()), (0, PlaybackMode::Idle));

    controller.play();
    tick(&mut controller);
    controller.load(five_steps());
    assert_eq!((controller.current_step(), controller.mode()), (0, PlaybackMode::Idle));
    assert_eq!(controller.scheduler().pending(), 0);
}

#[test]
fn scrub_clamps_into_range() {
    let mut controller = controller();
    assert_eq!(controller.scrub_to(999).unwrap().step, 4);
    assert_eq!(controller.mode(), PlaybackMode::ManualScrub);
    assert_eq!(controller.scrub_to(-5).unwrap().step, 0);

    controller.release_scrub();
    assert_eq!(controller.mode(), PlaybackMode::Idle);
    assert_eq!(controller.current_step(), 0);
}

#[test]
fn single_steps_clamp_at_both_ends() {
    let mut controller = controller();
    assert_eq!(controller.step_backward().unwrap().step, 0);
    for _ in 0..10 {
        controller.step_forward();
    }
    assert_eq!(controller.current_step(), 4);
    assert_eq!(controller.step_backward().unwrap().step, 3);
}

#[test]
fn play_resumes_from_a_scrubbed_position() {
    let mut controller = controller();
    controller.scrub_to(2);
    assert!(controller.play());
    assert_eq!(controller.mode(), PlaybackMode::AutoPlaying);
    assert_eq!(tick(&mut controller), Some(3));
}

#[test]
fn play_on_the_last_step_is_a_no_op() {
    let mut controller = controller();
    controller.scrub_to(4);
    assert!(!controller.play());
    assert_eq!(controller.mode(), PlaybackMode::ManualScrub);
    assert_eq!(controller.scheduler().pending(), 0);
}

#[test]
fn empty_sequence_means_no_animation() {
    let mut controller = controller();
    controller.load(expand(&[]));
    assert_eq!(controller.total_steps(), 0);
    assert!(!controller.play());
    assert_eq!(controller.scrub_to(3), None);
    assert_eq!(controller.current_label(), MotionLabel::Unknown);
}

#[test]
fn frames_carry_pose_and_label() {
    let mut controller = PlaybackController::new(TimerQueue::new(), SPEED, Pose::new(0.0, 0.0, 0.0));
    controller.load(expand(&[
        Pose::new(0.0, 0.0, 0.0),
        Pose::new(1.0, 0.0, 0.0),
        Pose::new(-1.0, -1.0, 5.0),
        Pose::new(-1.0, -1.0, -1.0),
        Pose::new(2.0, 0.0, 0.0),
    ]));
    assert_eq!(controller.current_label(), MotionLabel::Straight);

    controller.play();
    let mut frames = Vec::new();
    while let Some(handle) = controller.scheduler_mut().pop_next() {
        frames.extend(controller.on_tick(handle));
    }

    let labels: Vec<MotionLabel> = frames.iter().map(|f| f.label).collect();
    assert_eq!(
        labels,
        vec![
            MotionLabel::Scanning,
            MotionLabel::ScanDone,
            MotionLabel::Straight,
            MotionLabel::Unknown,
        ]
    );
    assert_eq!(frames[1].pose, Pose::new(1.0, 0.0, 0.0));
    assert_eq!(controller.current_pose(), Pose::new(2.0, 0.0, 0.0));
}
