//! Motion command compilation from state, emotion and personality.

pub mod compiler;
pub mod patterns;

pub use compiler::MotionCompiler;
pub use patterns::base_pattern;
