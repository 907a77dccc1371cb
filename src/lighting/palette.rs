//! Personality palettes and emotion overrides.

use crate::types::{Emotion, LightingState, Rgb, TextureType, Trait};

/// Base lighting for a dominant trait.
pub fn palette_for(dominant: Trait) -> LightingState {
    match dominant {
        Trait::CalmGenius => LightingState {
            glow_color: [0.1, 0.8, 0.9],
            glow_intensity: 0.4,
            edge_color: [0.8, 0.9, 1.0],
            texture_type: TextureType::Crystal,
            breathing_speed: 0.6,
            breathing_amplitude: 0.05,
            mood_color: [0.2, 0.6, 0.8],
        },
        Trait::Playful => LightingState {
            glow_color: [1.0, 0.3, 0.8],
            glow_intensity: 0.7,
            edge_color: [1.0, 0.6, 0.2],
            texture_type: TextureType::Neon,
            breathing_speed: 1.5,
            breathing_amplitude: 0.2,
            mood_color: [0.9, 0.4, 0.7],
        },
        Trait::Oracle => LightingState {
            glow_color: [0.6, 0.3, 1.0],
            glow_intensity: 0.5,
            edge_color: [0.9, 0.7, 1.0],
            texture_type: TextureType::Mystical,
            breathing_speed: 0.8,
            breathing_amplitude: 0.15,
            mood_color: [0.5, 0.3, 0.8],
        },
        Trait::Confident => LightingState {
            glow_color: [1.0, 0.7, 0.2],
            glow_intensity: 0.6,
            edge_color: [1.0, 0.9, 0.6],
            texture_type: TextureType::Metal,
            breathing_speed: 1.2,
            breathing_amplitude: 0.08,
            mood_color: [0.9, 0.6, 0.3],
        },
        Trait::Empathetic => LightingState {
            glow_color: [1.0, 0.6, 0.6],
            glow_intensity: 0.35,
            edge_color: [1.0, 0.85, 0.8],
            texture_type: TextureType::Soft,
            breathing_speed: 0.7,
            breathing_amplitude: 0.12,
            mood_color: [0.9, 0.6, 0.6],
        },
    }
}

/// Partial lighting patch applied on top of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightingOverride {
    pub glow_color: Option<Rgb>,
    pub edge_color: Option<Rgb>,
    pub mood_color: Option<Rgb>,
    pub breathing_speed: Option<f64>,
    pub breathing_amplitude: Option<f64>,
}

impl LightingOverride {
    pub fn apply(&self, base: LightingState) -> LightingState {
        LightingState {
            glow_color: self.glow_color.unwrap_or(base.glow_color),
            edge_color: self.edge_color.unwrap_or(base.edge_color),
            mood_color: self.mood_color.unwrap_or(base.mood_color),
            breathing_speed: self.breathing_speed.unwrap_or(base.breathing_speed),
            breathing_amplitude: self.breathing_amplitude.unwrap_or(base.breathing_amplitude),
            ..base
        }
    }
}

/// Only strong negative emotions recolor the palette.
pub fn emotion_override(emotion: Emotion) -> Option<LightingOverride> {
    match emotion {
        Emotion::Angry => Some(LightingOverride {
            glow_color: Some([1.0, 0.15, 0.1]),
            edge_color: Some([1.0, 0.3, 0.1]),
            breathing_speed: Some(2.5),
            breathing_amplitude: Some(0.25),
            ..LightingOverride::default()
        }),
        Emotion::Sad => Some(LightingOverride {
            glow_color: Some([0.2, 0.3, 0.7]),
            mood_color: Some([0.2, 0.25, 0.5]),
            breathing_speed: Some(0.4),
            breathing_amplitude: Some(0.05),
            ..LightingOverride::default()
        }),
        _ => None,
    }
}
