//! Discrete emotional gestures: short scripted whole-cube movements.
//!
//! A gesture is a fixed list of [`MovementPattern`] steps played through
//! the [`sequencer`](crate::sequencer) as a single discrete animation.

pub mod transcript;

use serde::{Deserialize, Serialize};

use crate::types::Axis;

pub use transcript::{analyze_transcript, Speaker};

/// Conversational mood used to pick a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureEmotion {
    #[default]
    Neutral,
    Happy,
    Thinking,
    Excited,
    Confused,
    Listening,
    Surprised,
    Calm,
}

impl GestureEmotion {
    pub const ALL: [GestureEmotion; 8] = [
        GestureEmotion::Neutral,
        GestureEmotion::Happy,
        GestureEmotion::Thinking,
        GestureEmotion::Excited,
        GestureEmotion::Confused,
        GestureEmotion::Listening,
        GestureEmotion::Surprised,
        GestureEmotion::Calm,
    ];

    /// The movement script for this gesture.
    pub fn pattern(&self) -> Vec<MovementPattern> {
        use Axis::{X, Y, Z};
        let r = MovementPattern::rotate;
        match self {
            GestureEmotion::Neutral => vec![r(Y, 0.1)],
            GestureEmotion::Happy => vec![r(Y, 0.5), r(X, 0.3), r(Y, -0.5)],
            GestureEmotion::Thinking => vec![r(X, 0.6), r(Y, 0.4)],
            GestureEmotion::Excited => vec![r(Y, 1.2), r(X, 0.8), r(Z, 0.6)],
            GestureEmotion::Confused => vec![r(Z, 0.5), r(Z, -1.0), r(Z, 0.5)],
            GestureEmotion::Listening => vec![r(X, 0.25), r(Y, 0.15)],
            GestureEmotion::Surprised => vec![r(X, -0.7), r(Y, 0.9)],
            GestureEmotion::Calm => vec![r(Y, 0.3), r(X, 0.2)],
        }
    }
}

/// One step of a gesture script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MovementPattern {
    /// Whole-cube rotation by `angle` radians.
    Rotate { axis: Axis, angle: f64 },
    /// Quarter-turn of one layer; `layer` and `direction` are each -1, 0 or 1.
    Twist { axis: Axis, layer: i8, direction: i8 },
    /// Nested steps played in order.
    Sequence { steps: Vec<MovementPattern> },
}

impl MovementPattern {
    pub fn rotate(axis: Axis, angle: f64) -> Self {
        MovementPattern::Rotate { axis, angle }
    }

    /// Depth-first list of the leaf steps (rotations and twists).
    pub fn flatten(&self) -> Vec<&MovementPattern> {
        match self {
            MovementPattern::Sequence { steps } => steps.iter().flat_map(|s| s.flatten()).collect(),
            leaf => vec![leaf],
        }
    }
}
