//! Stepwise playback of an expanded path
//!
//! The controller advances through the step sequence one frame at a time,
//! driven by a fixed-delay timer, single-step commands or a scrub slider.

pub mod controller;
/// Playback mode and cursor
pub mod state;
/// Auto-play timers
pub mod timer;

pub use controller::{Frame, PlaybackController, ScanEvent};
pub use state::{PlaybackMode, PlaybackState};
pub use timer::{Scheduler, TimerHandle, TimerQueue};
