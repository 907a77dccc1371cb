//! Discrete animation sequencing: one action in flight, FIFO queue behind
//! it, hard per-action timeouts.

pub mod machine;
pub mod request;

pub use machine::AnimationSequencer;
pub use request::{
    AnimationOutcome, AnimationRequest, AnimationTicket, DiscreteAction, SequencerEvent, Urgency,
};
