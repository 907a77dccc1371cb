//! Conversational cube state.

use serde::{Deserialize, Serialize};

/// Discrete conversational state of the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeState {
    #[default]
    Idle,
    Listening,
    Thinking,
    Responding,
}

impl CubeState {
    pub const ALL: [CubeState; 4] = [
        CubeState::Idle,
        CubeState::Listening,
        CubeState::Thinking,
        CubeState::Responding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CubeState::Idle => "idle",
            CubeState::Listening => "listening",
            CubeState::Thinking => "thinking",
            CubeState::Responding => "responding",
        }
    }

    /// Whether layer motion is modulated by the audio envelope in this state.
    pub fn is_audio_driven(&self) -> bool {
        matches!(self, CubeState::Listening | CubeState::Responding)
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
