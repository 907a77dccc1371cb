//! Cube state selection from classified emotion.

use crate::types::{CubeState, Emotion, EmotionOutput};

/// Intensity above which the cube is considered to be responding.
pub const RESPONDING_INTENSITY: f64 = 0.6;
/// Intensity above which the cube is considered to be listening.
pub const LISTENING_INTENSITY: f64 = 0.3;

/// Threshold an emotion reading into a [`CubeState`].
///
/// Checked in order: high intensity, confusion, moderate intensity, idle.
pub fn select_cube_state(emotion: &EmotionOutput) -> CubeState {
    if emotion.intensity > RESPONDING_INTENSITY {
        CubeState::Responding
    } else if emotion.emotion == Emotion::Confused {
        CubeState::Thinking
    } else if emotion.intensity > LISTENING_INTENSITY {
        CubeState::Listening
    } else {
        CubeState::Idle
    }
}

/// Wraps [`select_cube_state`] and remembers the last result so
/// transitions can be observed.
#[derive(Debug, Clone, Default)]
pub struct StateSelector {
    current: CubeState,
}

impl StateSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the state for this frame, logging when it changes.
    pub fn select(&mut self, emotion: &EmotionOutput) -> CubeState {
        let next = select_cube_state(emotion);
        if next != self.current {
            log::debug!(
                "cube state {} -> {} (emotion={}, intensity={:.3})",
                self.current,
                next,
                emotion.emotion,
                emotion.intensity
            );
            self.current = next;
        }
        next
    }

    pub fn current(&self) -> CubeState {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = CubeState::Idle;
    }
}
