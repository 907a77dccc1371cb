//! Value types shared across the pipeline stages.
//!
//! Every type here is a plain snapshot: engines own their history and
//! accumulators, and only these values cross stage boundaries.

pub mod animation;
pub mod audio;
pub mod emotion;
pub mod lighting;
pub mod motion;
pub mod personality;
pub mod state;

pub use animation::{AnimationParams, Layer, LayerOffsets, Vec3};
pub use audio::AudioFeatures;
pub use emotion::{Emotion, EmotionOutput};
pub use lighting::{LedState, LightingState, PanelContent, PanelKind, Rgb, SyncMode, TextureType};
pub use motion::{Axis, Easing, MotionCommand, MotionTarget};
pub use personality::{PersonalityProfile, Trait};
pub use state::CubeState;
