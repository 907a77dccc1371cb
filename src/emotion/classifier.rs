//! Rule-based emotion classifier with same-label temporal smoothing.

use crate::config::EmotionConfig;
use crate::types::{AudioFeatures, Emotion, EmotionOutput};
use crate::utilities::math::clamp_unit;
use crate::utilities::BoundedHistory;

/// Classifies per-frame audio features into an [`EmotionOutput`].
///
/// The engine owns its output history (used for smoothing) and the
/// previous pitch sample (used for confidence).
#[derive(Debug, Clone)]
pub struct EmotionEngine {
    config: EmotionConfig,
    history: BoundedHistory<EmotionOutput>,
    previous_pitch: Option<f64>,
}

impl Default for EmotionEngine {
    fn default() -> Self {
        Self::new(EmotionConfig::default())
    }
}

impl EmotionEngine {
    pub fn new(config: EmotionConfig) -> Self {
        let history = BoundedHistory::new(config.history_capacity);
        Self {
            config,
            history,
            previous_pitch: None,
        }
    }

    /// Classify one frame and fold it into the history.
    pub fn analyze_emotion(&mut self, features: &AudioFeatures) -> EmotionOutput {
        let f = features.clamped();

        let raw = EmotionOutput {
            emotion: classify(&f),
            intensity: clamp_unit(f.volume * 0.4 + f.variability * 0.3 + f.energy * 0.3),
            stress: clamp_unit(f.attack * 0.6 + f.variability * 0.4),
            energy: clamp_unit(f.volume * f.variability * 1.2),
            confidence: self.confidence(f.pitch),
        };

        let output = self.smooth(raw);
        self.history.push(output);
        output
    }

    /// `1 - |pitch - previous|`; the first sample has nothing to compare
    /// against and reports full confidence.
    fn confidence(&mut self, pitch: f64) -> f64 {
        let previous = self.previous_pitch.unwrap_or(pitch);
        self.previous_pitch = Some(pitch);
        clamp_unit(1.0 - (pitch - previous).abs())
    }

    /// Blend with the previous frame only when the label is unchanged, so
    /// real transitions come through immediately.
    fn smooth(&self, current: EmotionOutput) -> EmotionOutput {
        let previous = match self.history.latest() {
            Some(p) if p.emotion == current.emotion => p,
            _ => return current,
        };
        let keep = self.config.smoothing;
        let blend = |prev: f64, curr: f64| prev * keep + curr * (1.0 - keep);
        EmotionOutput {
            emotion: current.emotion,
            intensity: blend(previous.intensity, current.intensity),
            stress: blend(previous.stress, current.stress),
            energy: blend(previous.energy, current.energy),
            confidence: blend(previous.confidence, current.confidence),
        }
    }

    /// History snapshot, oldest first.
    pub fn history(&self) -> Vec<EmotionOutput> {
        self.history.to_vec()
    }

    /// The most recent output, if any frame has been analyzed.
    pub fn latest(&self) -> Option<EmotionOutput> {
        self.history.latest().copied()
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.previous_pitch = None;
    }
}

/// Ordered rule cascade; the first matching rule wins.
pub fn classify(f: &AudioFeatures) -> Emotion {
    if f.volume > 0.75 && f.attack > 0.6 {
        Emotion::Angry
    } else if f.volume < 0.35 && f.pitch < 0.4 {
        Emotion::Sad
    } else if f.variability > 0.55 && f.pitch > 0.5 {
        Emotion::Excited
    } else if f.variability > 0.4 && f.spectral_centroid < 0.3 {
        Emotion::Confused
    } else {
        Emotion::Calm
    }
}
