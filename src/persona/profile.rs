//! Emotion-to-trait mapping and normalization.
//!
//! These are pure functions; the stateful blending lives in
//! [`PersonalityEngine`](super::PersonalityEngine).

use crate::types::{Emotion, EmotionOutput, PersonalityProfile};
use crate::utilities::math::clamp_unit;

/// Uniform prior every emotion starts from.
pub const BASE_TRAIT_WEIGHT: f64 = 0.2;

/// Raw trait weights for one emotion, canonical order, each clamped to 0.0–1.0.
///
/// The result is *not* normalized; clamping happens first, so the weights
/// generally do not sum to 1.
pub fn emotion_to_traits(emotion: &EmotionOutput) -> [f64; 5] {
    let EmotionOutput {
        emotion: kind,
        intensity,
        stress,
        energy,
        confidence,
    } = *emotion;

    let [mut calm_genius, mut playful, mut oracle, mut confident, mut empathetic] =
        [BASE_TRAIT_WEIGHT; 5];

    match kind {
        Emotion::Calm => {
            calm_genius += 0.3 * intensity;
            confident += 0.2 * confidence;
            empathetic += 0.1 * energy;
        }
        Emotion::Excited => {
            playful += 0.4 * intensity;
            confident += 0.2 * energy;
            oracle += 0.1 * confidence;
        }
        Emotion::Angry => {
            confident += 0.3 * intensity;
            empathetic -= 0.2 * stress;
            playful -= 0.1 * intensity;
        }
        Emotion::Sad => {
            empathetic += 0.3 * (1.0 - energy);
            calm_genius += 0.2 * (1.0 - stress);
            confident -= 0.2 * intensity;
        }
        Emotion::Confused => {
            calm_genius += 0.2 * (1.0 - confidence);
            oracle += 0.3 * confidence;
            confident -= 0.2 * intensity;
        }
    }

    [calm_genius, playful, oracle, confident, empathetic].map(clamp_unit)
}

/// Scale weights to sum to 1; an all-zero input becomes uniform.
pub fn normalize(weights: [f64; 5]) -> [f64; 5] {
    let sum: f64 = weights.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return [1.0 / weights.len() as f64; 5];
    }
    weights.map(|w| w / sum)
}

/// `previous·(1 − rate) + current·rate`, dominant recomputed from the result.
pub fn blend(previous: &PersonalityProfile, current: &PersonalityProfile, rate: f64) -> PersonalityProfile {
    let prev = previous.weights();
    let curr = current.weights();
    let mut out = [0.0; 5];
    for i in 0..out.len() {
        out[i] = prev[i] * (1.0 - rate) + curr[i] * rate;
    }
    PersonalityProfile::from_weights(out)
}
