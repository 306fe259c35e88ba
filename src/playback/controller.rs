//! Playback controller
//!
//! Owns the playback state and the single outstanding auto-play timer.
//! Auto-play, single-stepping and scrubbing are mutually exclusive: manual
//! moves are refused while the timer runs, and every exit from auto-play
//! cancels the timer before returning so a late tick can never move the
//! cursor again.

use std::time::Duration;

use log::{debug, info};

use super::state::{PlaybackMode, PlaybackState};
use super::timer::{Scheduler, TimerHandle};
use crate::core::{last_position, Pose, Step};
use crate::navigation::{describe, transition_label, MotionLabel, StatusReport};

/// Scan notification raised when the cursor lands on a scan step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanEvent {
    /// "Scanning image..."
    Scanning,
    /// "Image scanned!"
    ScanDone,
}

/// What the view receives for every step the cursor lands on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Index of the step
    pub step: usize,
    /// Pose to draw the robot at
    pub pose: Pose,
    /// Motion from this step to the next
    pub label: MotionLabel,
    /// Set when the step is a scan marker
    pub event: Option<ScanEvent>,
}

/// Stepwise playback engine
pub struct PlaybackController<S: Scheduler> {
    state: PlaybackState,
    scheduler: S,
    timer: Option<TimerHandle>,
    animation_speed: Duration,
    initial_pose: Pose,
}

impl<S: Scheduler> PlaybackController<S> {
    /// Creates an idle controller with nothing loaded
    pub fn new(scheduler: S, animation_speed: Duration, initial_pose: Pose) -> Self {
        PlaybackController {
            state: PlaybackState::default(),
            scheduler,
            timer: None,
            animation_speed,
            initial_pose,
        }
    }

    /// Installs a new step sequence and rewinds to step 0
    pub fn load(&mut self, sequence: Vec<Step>) {
        self.cancel_timer();
        self.state = PlaybackState::with_sequence(sequence);
        info!("Loaded playback sequence with {} steps", self.state.total_steps());
    }

    /// Drops the loaded sequence
    pub fn clear(&mut self) {
        self.cancel_timer();
        self.state = PlaybackState::default();
        debug!("Playback sequence cleared");
    }

    /// Starts auto-play from the current step. Returns false when there is
    /// nothing to play or the cursor already sits on the last step.
    pub fn play(&mut self) -> bool {
        if self.state.mode == PlaybackMode::AutoPlaying {
            debug!("Ignoring play: already playing");
            return false;
        }
        if !self.state.is_loaded() || self.state.at_end() {
            debug!("Ignoring play: nothing left to play");
            return false;
        }

        self.state.mode = PlaybackMode::AutoPlaying;
        self.timer = Some(self.scheduler.schedule(self.animation_speed));
        info!("Playback started at step {}", self.state.current_step);
        true
    }

    /// Stops auto-play, keeping the cursor where it is
    pub fn pause(&mut self) {
        if self.state.mode != PlaybackMode::AutoPlaying {
            return;
        }
        self.cancel_timer();
        self.state.mode = PlaybackMode::Idle;
        info!("Playback paused at step {}", self.state.current_step);
    }

    /// Handles a fired timer. Ticks other than the one outstanding timer are
    /// stale and ignored.
    pub fn on_tick(&mut self, handle: TimerHandle) -> Option<Frame> {
        if self.state.mode != PlaybackMode::AutoPlaying || self.timer != Some(handle) {
            debug!("Ignoring stale tick #{}", handle.id());
            return None;
        }
        self.timer = None;

        let last = self.state.last_index()?;
        if self.state.current_step >= last {
            self.state.mode = PlaybackMode::Idle;
            return None;
        }

        self.state.current_step += 1;
        let frame = self.emit();
        if self.state.current_step == last {
            self.state.mode = PlaybackMode::Idle;
            info!("Playback finished at step {}", last);
        } else {
            self.timer = Some(self.scheduler.schedule(self.animation_speed));
        }
        frame
    }

    /// Moves one step forward
    pub fn step_forward(&mut self) -> Option<Frame> {
        let target = self.state.current_step as isize + 1;
        self.manual_move(target)
    }

    /// Moves one step back
    pub fn step_backward(&mut self) -> Option<Frame> {
        let target = self.state.current_step as isize - 1;
        self.manual_move(target)
    }

    /// Jumps to `index`, clamped into the loaded range
    pub fn scrub_to(&mut self, index: isize) -> Option<Frame> {
        self.manual_move(index)
    }

    /// Ends a scrub gesture
    pub fn release_scrub(&mut self) {
        if self.state.mode == PlaybackMode::ManualScrub {
            self.state.mode = PlaybackMode::Idle;
        }
    }

    /// Pose the robot is drawn at: the latest real position at or before the
    /// cursor, or the initial pose
    pub fn current_pose(&self) -> Pose {
        last_position(self.state.steps(), self.state.current_step)
            .copied()
            .unwrap_or(self.initial_pose)
    }

    /// Motion from the current step to the next
    pub fn current_label(&self) -> MotionLabel {
        transition_label(self.state.steps(), self.state.current_step)
    }

    /// Status read-out for the current step
    pub fn status(&self) -> Option<StatusReport> {
        if !self.state.is_loaded() {
            return None;
        }
        Some(describe(self.state.steps(), self.state.current_step))
    }

    /// Frame for the current step
    pub fn current_frame(&self) -> Option<Frame> {
        let step = self.state.steps().get(self.state.current_step)?;
        Some(Frame {
            step: self.state.current_step,
            pose: self.current_pose(),
            label: self.current_label(),
            event: match step {
                Step::ScanStart => Some(ScanEvent::Scanning),
                Step::ScanDone => Some(ScanEvent::ScanDone),
                Step::Position(_) => None,
            },
        })
    }

    /// Index of the step under the cursor
    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    /// Number of loaded steps
    pub fn total_steps(&self) -> usize {
        self.state.total_steps()
    }

    /// Active mode
    pub fn mode(&self) -> PlaybackMode {
        self.state.mode
    }

    /// Whether auto-play is running
    pub fn is_playing(&self) -> bool {
        self.state.mode == PlaybackMode::AutoPlaying
    }

    /// Full playback state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Loaded steps
    pub fn steps(&self) -> &[Step] {
        self.state.steps()
    }

    /// Timer armed for the next tick, if any
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// Pose shown when nothing has been played yet
    pub fn set_initial_pose(&mut self, pose: Pose) {
        self.initial_pose = pose;
    }

    /// Timer source driving auto-play
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable timer source, for drivers that deliver ticks
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn manual_move(&mut self, target: isize) -> Option<Frame> {
        if self.state.mode == PlaybackMode::AutoPlaying {
            debug!("Ignoring manual move while playing");
            return None;
        }
        let index = self.state.clamp_index(target)?;
        self.state.current_step = index;
        self.state.mode = PlaybackMode::ManualScrub;
        self.emit()
    }

    fn emit(&self) -> Option<Frame> {
        let frame = self.current_frame()?;
        match frame.event {
            Some(ScanEvent::Scanning) => info!("Scanning image..."),
            Some(ScanEvent::ScanDone) => info!("Image scanned!"),
            None => debug!(
                "Step {}: ({}, {}) {}",
                frame.step, frame.pose.x, frame.pose.y, frame.label
            ),
        }
        Some(frame)
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}
