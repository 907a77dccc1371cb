//! Conversation events and the per-frame input they write into.
//!
//! Events arrive from the voice transport at any time. They never advance
//! the pipeline; they only overwrite fields of [`FrameInput`], which the next
//! frame tick reads.

pub mod input;
pub mod types;

pub use input::FrameInput;
pub use types::{AvatarEvent, EventEffect, Message};
