//! Target parameters for each conversational state.
//!
//! `layer_offsets` in a preset holds per-layer angular *speeds* (deg/s);
//! the interpolator integrates them into angles.

use crate::audio::EnvelopeReading;
use crate::types::{AnimationParams, CubeState, LayerOffsets, Vec3};
use crate::utilities::math::mix;

const RESPONDING_BASE_SPEED: f64 = 30.0;
const RESPONDING_BASE_AMPLITUDE: f64 = 10.0;
const EMPHASIS_BOOST: f64 = 1.5;

/// Slow ambient drift.
pub const IDLE: AnimationParams = AnimationParams {
    global_rotation_speed: Vec3::new(2.0, 5.0, 1.0),
    global_rocking_amplitude: Vec3::new(2.0, 0.0, 1.0),
    layer_offsets: LayerOffsets::new(0.2, -0.1, 0.1, 0.0, 0.1, 0.0),
    scale: 1.0,
};

/// Fast, even spin while the assistant works something out.
pub const THINKING: AnimationParams = AnimationParams {
    global_rotation_speed: Vec3::new(10.0, 60.0, 5.0),
    global_rocking_amplitude: Vec3::new(10.0, 0.0, 5.0),
    layer_offsets: LayerOffsets::new(5.0, -5.0, 5.0, 2.0, -2.0, 2.0),
    scale: 1.0,
};

fn listening(e: f64) -> AnimationParams {
    AnimationParams {
        global_rotation_speed: Vec3::new(0.0, mix(5.0, 20.0, e), 0.0),
        global_rocking_amplitude: Vec3::new(mix(3.0, 10.0, e), 0.0, mix(2.0, 5.0, e)),
        layer_offsets: LayerOffsets::new(0.0, 1.0 + e * 5.0, 0.0, 0.0, -1.0 - e * 3.0, 0.0),
        scale: 1.0 + e * 0.05,
    }
}

fn responding(e: f64, m: f64) -> AnimationParams {
    let (speed, amplitude) = if m > 0.5 {
        (
            RESPONDING_BASE_SPEED * EMPHASIS_BOOST,
            RESPONDING_BASE_AMPLITUDE * EMPHASIS_BOOST,
        )
    } else {
        (RESPONDING_BASE_SPEED, RESPONDING_BASE_AMPLITUDE)
    };

    AnimationParams {
        global_rotation_speed: Vec3::new(
            mix(5.0, 15.0, e) + m * 10.0,
            mix(speed * 0.5, speed, e),
            mix(2.0, 8.0, e) + m * 5.0,
        ),
        global_rocking_amplitude: Vec3::new(
            mix(amplitude * 0.3, amplitude, e),
            0.0,
            mix(amplitude * 0.2, amplitude * 0.7, e),
        ),
        layer_offsets: LayerOffsets::new(
            mix(2.0, 10.0, e) + m * 10.0,
            mix(-2.0, -8.0, e) - m * 8.0,
            mix(1.0, 5.0, e),
            mix(1.0, 6.0, e),
            mix(-1.0, -5.0, e) - m * 5.0,
            mix(1.0, 4.0, e),
        ),
        scale: 1.0 + e * 0.1 + m * 0.05,
    }
}

/// The target for `state`, shaped by the envelope in the audio-driven states.
pub fn target_for(state: CubeState, reading: EnvelopeReading) -> AnimationParams {
    match state {
        CubeState::Idle => IDLE,
        CubeState::Listening => listening(reading.smoothed_energy),
        CubeState::Thinking => THINKING,
        CubeState::Responding => responding(reading.smoothed_energy, reading.emphasis),
    }
}
