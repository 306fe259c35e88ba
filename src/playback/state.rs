// playback/state.rs

// Playback state: the loaded step sequence, the index under the cursor and
// which of the three ways of moving through the timeline is active.

use crate::core::Step;

/// How the timeline is currently being driven
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Nothing driving the timeline
    #[default]
    Idle,
    /// Timer advancing one step per tick
    AutoPlaying,
    /// User stepping or dragging the slider
    ManualScrub,
}

/// Owned playback state.
///
/// Invariants: `current_step < sequence.len()` whenever a sequence is loaded,
/// and no sequence implies `PlaybackMode::Idle`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackState {
    pub(crate) current_step: usize,
    pub(crate) mode: PlaybackMode,
    pub(crate) sequence: Option<Vec<Step>>,
}

impl PlaybackState {
    /// State holding `sequence` at step 0; an empty sequence counts as none
    pub fn with_sequence(sequence: Vec<Step>) -> Self {
        PlaybackState {
            current_step: 0,
            mode: PlaybackMode::Idle,
            sequence: if sequence.is_empty() { None } else { Some(sequence) },
        }
    }

    /// Index of the step under the cursor
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Active mode
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Loaded steps, empty when nothing is loaded
    pub fn steps(&self) -> &[Step] {
        self.sequence.as_deref().unwrap_or(&[])
    }

    /// Whether an animation is available
    pub fn is_loaded(&self) -> bool {
        self.sequence.is_some()
    }

    /// Number of steps in the loaded sequence
    pub fn total_steps(&self) -> usize {
        self.steps().len()
    }

    /// Index of the final step, if anything is loaded
    pub fn last_index(&self) -> Option<usize> {
        self.total_steps().checked_sub(1)
    }

    /// Whether the cursor sits on the final step
    pub fn at_end(&self) -> bool {
        self.last_index() == Some(self.current_step)
    }

    /// Clamps a requested index into the loaded range
    pub fn clamp_index(&self, index: isize) -> Option<usize> {
        let last = self.last_index()?;
        Some(index.clamp(0, last.min(isize::MAX as usize) as isize) as usize)
    }
}
