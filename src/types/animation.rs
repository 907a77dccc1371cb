//! Render-facing animation parameter bundle.

use serde::{Deserialize, Serialize};

use crate::utilities::math::lerp;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise interpolation toward `target`.
    pub fn approach(&mut self, target: &Vec3, t: f64) {
        self.x = lerp(self.x, target.x, t);
        self.y = lerp(self.y, target.y, t);
        self.z = lerp(self.z, target.z, t);
    }
}

/// The six rotatable cube slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    H1,
    H2,
    H3,
    V1,
    V2,
    V3,
}

impl Layer {
    pub const ALL: [Layer; 6] = [
        Layer::H1,
        Layer::H2,
        Layer::H3,
        Layer::V1,
        Layer::V2,
        Layer::V3,
    ];
}

/// Per-layer scalar, used both for preset speeds (deg/s) and accumulated
/// angles (deg).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct LayerOffsets {
    pub H1: f64,
    pub H2: f64,
    pub H3: f64,
    pub V1: f64,
    pub V2: f64,
    pub V3: f64,
}

impl LayerOffsets {
    pub const fn new(h1: f64, h2: f64, h3: f64, v1: f64, v2: f64, v3: f64) -> Self {
        Self {
            H1: h1,
            H2: h2,
            H3: h3,
            V1: v1,
            V2: v2,
            V3: v3,
        }
    }

    pub fn get(&self, layer: Layer) -> f64 {
        match layer {
            Layer::H1 => self.H1,
            Layer::H2 => self.H2,
            Layer::H3 => self.H3,
            Layer::V1 => self.V1,
            Layer::V2 => self.V2,
            Layer::V3 => self.V3,
        }
    }

    pub fn get_mut(&mut self, layer: Layer) -> &mut f64 {
        match layer {
            Layer::H1 => &mut self.H1,
            Layer::H2 => &mut self.H2,
            Layer::H3 => &mut self.H3,
            Layer::V1 => &mut self.V1,
            Layer::V2 => &mut self.V2,
            Layer::V3 => &mut self.V3,
        }
    }
}

/// Per-frame output consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationParams {
    /// Degrees per second around each axis.
    pub global_rotation_speed: Vec3,
    /// Rocking amplitude in degrees.
    pub global_rocking_amplitude: Vec3,
    /// Accumulated layer angles in degrees (unbounded).
    pub layer_offsets: LayerOffsets,
    pub scale: f64,
}
