//! Palette selection plus sinusoidal breathing.

use std::f64::consts::TAU;

use crate::types::{EmotionOutput, LightingState, PersonalityProfile};
use crate::utilities::math::sanitize_delta;

use super::palette::{emotion_override, palette_for};

#[derive(Debug, Clone, Default)]
pub struct LightingEngine {
    current: LightingState,
    /// Breathing phase in radians, kept in `[0, 2π)`.
    phase: f64,
}

impl LightingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute lighting for this frame and advance the breathing phase.
    pub fn update_lighting(
        &mut self,
        emotion: &EmotionOutput,
        personality: &PersonalityProfile,
        delta_time: f64,
    ) -> LightingState {
        let base = palette_for(personality.dominant);
        let lit = match emotion_override(emotion.emotion) {
            Some(patch) => patch.apply(base),
            None => base,
        };

        let dt = sanitize_delta(delta_time);
        self.phase = (self.phase + dt * lit.breathing_speed * TAU).rem_euclid(TAU);
        let breath = self.phase.sin() * lit.breathing_amplitude;

        self.current = LightingState {
            glow_intensity: (lit.glow_intensity + breath).max(0.0),
            ..lit
        };
        self.current
    }

    pub fn current(&self) -> LightingState {
        self.current
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Emotion, TextureType, Trait};

    fn profile(dominant: Trait) -> PersonalityProfile {
        let mut w = [0.1; 5];
        w[Trait::ALL.iter().position(|t| *t == dominant).unwrap()] = 0.6;
        PersonalityProfile::from_weights(w)
    }

    #[test]
    fn test_default_is_metal() {
        let engine = LightingEngine::new();
        assert_eq!(engine.current().texture_type, TextureType::Metal);
        assert_eq!(engine.phase(), 0.0);
    }

    #[test]
    fn test_palette_follows_dominant_trait() {
        let mut engine = LightingEngine::new();
        let lit = engine.update_lighting(&EmotionOutput::default(), &profile(Trait::Playful), 0.0);
        assert_eq!(lit.texture_type, TextureType::Neon);
        assert_eq!(lit.glow_intensity, 0.7);
    }

    #[test]
    fn test_breathing_quarter_cycle_peaks() {
        let mut engine = LightingEngine::new();
        // calm_genius breathes at 0.6 Hz with amplitude 0.05
        let lit = engine.update_lighting(&EmotionOutput::default(), &profile(Trait::CalmGenius), 0.25 / 0.6);
        assert!((lit.glow_intensity - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_phase_wraps() {
        let mut engine = LightingEngine::new();
        for _ in 0..1000 {
            engine.update_lighting(&EmotionOutput::default(), &profile(Trait::Playful), 0.1);
            assert!((0.0..TAU).contains(&engine.phase()));
        }
    }

    #[test]
    fn test_glow_never_negative() {
        let mut engine = LightingEngine::new();
        let angry = EmotionOutput {
            emotion: Emotion::Angry,
            ..EmotionOutput::default()
        };
        for _ in 0..500 {
            let lit = engine.update_lighting(&angry, &profile(Trait::Empathetic), 0.013);
            assert!(lit.glow_intensity >= 0.0);
            assert_eq!(lit.breathing_speed, 2.5);
        }
    }
}
