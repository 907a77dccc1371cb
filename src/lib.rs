//! # Cube Avatar
//!
//! Signal-to-motion pipeline for an animated cube avatar.
//!
//! Noisy per-frame audio features and discrete conversation events go in;
//! bounded, smoothly varying render parameters (rotation, rocking, layer
//! angles, scale, lighting and LED panels) come out every frame. Discrete
//! quarter-turns and gestures run through a busy-guarded sequencer and
//! interleave with the continuous motion.
//!
//! ```no_run
//! use cube_avatar::{AvatarPipeline, AvatarConfig};
//! use cube_avatar::events::AvatarEvent;
//! use cube_avatar::types::AudioFeatures;
//!
//! let mut pipeline = AvatarPipeline::new(AvatarConfig::default());
//! pipeline.handle_event(&AvatarEvent::CallStart);
//! let frame = pipeline.tick(1.0 / 60.0, &AudioFeatures::default());
//! println!("{:?}", frame.animation);
//! ```

pub mod animation;
pub mod audio;
pub mod config;
pub mod cube;
pub mod emotion;
pub mod events;
pub mod gesture;
pub mod lighting;
pub mod motion;
pub mod persona;
pub mod pipeline;
pub mod sequencer;
pub mod state;
pub mod types;
pub mod utilities;

pub use animation::ParameterInterpolator;
pub use audio::{EnvelopeFollower, EnvelopeReading};
pub use config::{AvatarConfig, ConfigError};
pub use cube::{CubeController, CubeModel, Twist};
pub use emotion::EmotionEngine;
pub use lighting::{LedEngine, LightingEngine};
pub use motion::MotionCompiler;
pub use persona::PersonalityEngine;
pub use pipeline::{AvatarPipeline, FrameOutput};
pub use sequencer::{AnimationOutcome, AnimationSequencer, AnimationTicket, Urgency};
pub use state::select_cube_state;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
