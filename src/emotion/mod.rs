//! Emotion classification from audio features.

pub mod classifier;

pub use classifier::{classify, EmotionEngine};
