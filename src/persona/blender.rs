//! Frame-to-frame personality blending.

use crate::config::PersonalityConfig;
use crate::types::{EmotionOutput, PersonalityProfile};
use crate::utilities::BoundedHistory;

use super::profile::{blend, emotion_to_traits, normalize};

/// Derives a [`PersonalityProfile`] from each emotion reading and keeps a
/// short history of the results.
#[derive(Debug, Clone)]
pub struct PersonalityEngine {
    config: PersonalityConfig,
    history: BoundedHistory<PersonalityProfile>,
}

impl Default for PersonalityEngine {
    fn default() -> Self {
        Self::new(PersonalityConfig::default())
    }
}

impl PersonalityEngine {
    pub fn new(config: PersonalityConfig) -> Self {
        let history = BoundedHistory::new(config.history_capacity);
        Self { config, history }
    }

    /// Map `emotion` to a normalized profile, blended toward `previous`
    /// when one is given.
    ///
    /// Both inputs are normalized distributions, so the blend also sums to 1.
    pub fn compute_personality(
        &mut self,
        emotion: &EmotionOutput,
        previous: Option<&PersonalityProfile>,
    ) -> PersonalityProfile {
        let current = PersonalityProfile::from_weights(normalize(emotion_to_traits(emotion)));

        let profile = match previous {
            Some(prev) => blend(prev, &current, self.config.blend_rate),
            None => current,
        };

        if previous.map(|p| p.dominant) != Some(profile.dominant) {
            log::debug!(
                "dominant trait is now {} ({:.3})",
                profile.dominant.as_str(),
                profile.weight(profile.dominant)
            );
        }

        self.history.push(profile);
        profile
    }

    /// History snapshot, oldest first.
    pub fn history(&self) -> Vec<PersonalityProfile> {
        self.history.to_vec()
    }

    pub fn latest(&self) -> Option<PersonalityProfile> {
        self.history.latest().copied()
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Emotion, Trait};

    fn emotion(kind: Emotion, intensity: f64, stress: f64, energy: f64, confidence: f64) -> EmotionOutput {
        EmotionOutput {
            emotion: kind,
            intensity,
            stress,
            energy,
            confidence,
        }
    }

    #[test]
    fn test_weights_sum_to_one_for_every_input() {
        let mut engine = PersonalityEngine::default();
        let levels = [0.0, 0.3, 0.5, 1.0];
        let mut previous: Option<PersonalityProfile> = None;
        for kind in Emotion::ALL {
            for &i in &levels {
                for &s in &levels {
                    for &e in &levels {
                        for &c in &levels {
                            let p = engine.compute_personality(&emotion(kind, i, s, e, c), previous.as_ref());
                            assert!((p.sum() - 1.0).abs() < 1e-9, "{:?} sums to {}", p, p.sum());
                            previous = Some(p);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_excited_makes_playful_dominant() {
        let mut engine = PersonalityEngine::default();
        let p = engine.compute_personality(&emotion(Emotion::Excited, 1.0, 0.2, 0.5, 0.5), None);
        assert_eq!(p.dominant, Trait::Playful);
    }

    #[test]
    fn test_neutral_tie_goes_to_first_trait() {
        let mut engine = PersonalityEngine::default();
        // excited with zero intensity, energy and confidence adds nothing
        let p = engine.compute_personality(&emotion(Emotion::Excited, 0.0, 0.0, 0.0, 0.0), None);
        for w in p.weights() {
            assert!((w - 0.2).abs() < 1e-12);
        }
        assert_eq!(p.dominant, Trait::CalmGenius);
    }

    #[test]
    fn test_blend_with_previous() {
        let mut engine = PersonalityEngine::default();
        let input = emotion(Emotion::Calm, 0.5, 0.2, 0.3, 0.5);
        let fresh = engine.compute_personality(&input, None);
        let previous = PersonalityProfile::default();
        let blended = engine.compute_personality(&input, Some(&previous));

        let expected = previous.calm_genius * 0.2 + fresh.calm_genius * 0.8;
        assert!((blended.calm_genius - expected).abs() < 1e-12);
        assert!((blended.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_dominant_is_recomputed_after_blend() {
        let mut engine = PersonalityEngine::default();
        let previous = PersonalityProfile::from_weights([0.9, 0.025, 0.025, 0.025, 0.025]);
        let p = engine.compute_personality(&emotion(Emotion::Excited, 1.0, 0.0, 1.0, 1.0), Some(&previous));
        // fresh playful = 0.6 / 1.7, calm_genius = 0.2 / 1.7
        assert_eq!(p.dominant, Trait::Playful);
    }

    #[test]
    fn test_history_is_capped() {
        let mut engine = PersonalityEngine::default();
        for _ in 0..15 {
            engine.compute_personality(&EmotionOutput::default(), None);
        }
        assert_eq!(engine.history().len(), 10);
        engine.reset();
        assert!(engine.latest().is_none());
    }
}
