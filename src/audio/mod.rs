//! Audio envelope tracking.
//!
//! Feature extraction (FFT, pitch detection) happens upstream; this module
//! only shapes the scalar energy signal it is handed.

pub mod envelope;

pub use envelope::{EnvelopeFollower, EnvelopeReading};
