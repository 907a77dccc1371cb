//! Classified emotion snapshot.

use serde::{Deserialize, Serialize};

/// Discrete emotion categories produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Angry,
    Sad,
    Excited,
    Confused,
    Calm,
}

impl Emotion {
    /// All categories in classifier priority order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Angry,
        Emotion::Sad,
        Emotion::Excited,
        Emotion::Confused,
        Emotion::Calm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Angry => "angry",
            Emotion::Sad => "sad",
            Emotion::Excited => "excited",
            Emotion::Confused => "confused",
            Emotion::Calm => "calm",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One frame of classifier output. All metrics are within 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionOutput {
    pub emotion: Emotion,
    pub intensity: f64,
    pub stress: f64,
    pub energy: f64,
    pub confidence: f64,
}

impl Default for EmotionOutput {
    /// Resting state shown before the first audio sample arrives.
    fn default() -> Self {
        Self {
            emotion: Emotion::Calm,
            intensity: 0.5,
            stress: 0.2,
            energy: 0.3,
            confidence: 0.5,
        }
    }
}
