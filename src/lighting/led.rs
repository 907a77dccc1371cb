//! LED panel shader selection.

use crate::types::{CubeState, LedState, PanelContent, PersonalityProfile, SyncMode, Trait};

/// Picks one shader for all 54 panels from the cube state, with
/// personality overriding the shader name (not the sync mode).
#[derive(Debug, Clone, Default)]
pub struct LedEngine {
    current: LedState,
}

impl LedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_leds(&mut self, state: CubeState, personality: &PersonalityProfile) -> LedState {
        let (shader, sync) = shader_for(state, personality.dominant);
        self.current = LedState::uniform(PanelContent::shader(shader, sync));
        self.current.clone()
    }

    pub fn current(&self) -> &LedState {
        &self.current
    }

    pub fn reset(&mut self) {
        self.current = LedState::default();
    }
}

fn shader_for(state: CubeState, dominant: Trait) -> (&'static str, SyncMode) {
    let (shader, sync) = match state {
        CubeState::Idle => ("glow", SyncMode::Global),
        CubeState::Listening => ("ripple", SyncMode::Tile),
        CubeState::Thinking => ("oracle", SyncMode::Face),
        CubeState::Responding => ("sparkle", SyncMode::Global),
    };
    let shader = match dominant {
        Trait::Playful => "sparkle",
        Trait::CalmGenius => "heatmap",
        _ => shader,
    };
    (shader, sync)
}
