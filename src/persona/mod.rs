//! Personality layer: a five-trait distribution derived from emotion.
//!
//! ```text
//! EmotionOutput
//!   ↓  per-emotion adjustments on a uniform 0.2 prior, clamped
//! raw trait weights
//!   ↓  normalize (sum = 1)
//! PersonalityProfile { weights, dominant }
//!   ↓  blend with previous frame (previous·0.2 + current·0.8)
//! PersonalityProfile
//! ```
//!
//! The dominant trait selects idle/thinking motion patterns, the lighting
//! palette and LED shader overrides.

pub mod blender;
pub mod profile;

pub use blender::PersonalityEngine;
pub use profile::{emotion_to_traits, normalize};
