//! Lighting and LED panel output.
//!
//! Both engines follow the classified cube state and dominant personality
//! trait; only lighting keeps time-dependent state (the breathing phase).

pub mod engine;
pub mod led;
pub mod palette;

pub use engine::LightingEngine;
pub use led::LedEngine;
pub use palette::{emotion_override, palette_for, LightingOverride};
