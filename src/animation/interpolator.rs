//! Exponential interpolation of render parameters toward the state preset.

use crate::audio::EnvelopeReading;
use crate::config::InterpolationConfig;
use crate::types::{AnimationParams, CubeState, Layer, LayerOffsets};
use crate::utilities::math::{lerp, sanitize_delta};

use super::presets::{self, target_for};

/// Owns the live [`AnimationParams`] and integrates layer angles.
///
/// Parameters are mutated in place every frame; they are never replaced by
/// a preset wholesale, so a state change always eases in.
#[derive(Debug, Clone)]
pub struct ParameterInterpolator {
    config: InterpolationConfig,
    state: CubeState,
    params: AnimationParams,
}

impl Default for ParameterInterpolator {
    fn default() -> Self {
        Self::new(InterpolationConfig::default())
    }
}

impl ParameterInterpolator {
    /// Start at rest in the idle preset with all layer angles at zero.
    pub fn new(config: InterpolationConfig) -> Self {
        Self {
            config,
            state: CubeState::Idle,
            params: initial_params(),
        }
    }

    pub fn set_state(&mut self, state: CubeState) {
        if state != self.state {
            log::debug!("interpolator state {} -> {}", self.state, state);
            self.state = state;
        }
    }

    pub fn state(&self) -> CubeState {
        self.state
    }

    /// Advance by `delta_time` seconds toward the current state's preset.
    pub fn update(&mut self, delta_time: f64, reading: EnvelopeReading) -> AnimationParams {
        let dt = sanitize_delta(delta_time);
        if dt == 0.0 {
            return self.params;
        }

        let target = target_for(self.state, reading);
        let step = self.config.rotation_rate * dt;
        let p = &mut self.params;

        p.global_rotation_speed.approach(&target.global_rotation_speed, step);
        p.global_rocking_amplitude.approach(&target.global_rocking_amplitude, step);
        p.scale = lerp(p.scale, target.scale, self.config.scale_rate * dt);

        let energy_factor = if self.state.is_audio_driven() {
            0.2 + reading.smoothed_energy * 0.8 + reading.emphasis * 0.5
        } else {
            1.0
        };
        for layer in Layer::ALL {
            *p.layer_offsets.get_mut(layer) += target.layer_offsets.get(layer) * dt * energy_factor;
        }

        *p
    }

    pub fn params(&self) -> AnimationParams {
        self.params
    }

    pub fn reset(&mut self) {
        self.state = CubeState::Idle;
        self.params = initial_params();
    }
}

fn initial_params() -> AnimationParams {
    AnimationParams {
        layer_offsets: LayerOffsets::default(),
        ..presets::IDLE
    }
}
