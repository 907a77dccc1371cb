//! Per-frame audio feature sample supplied by the external feature source.

use serde::{Deserialize, Serialize};

use crate::utilities::math::clamp_unit;

/// Raw audio features for one frame.
///
/// Producers are expected to stay within 0.0–1.0 but nothing enforces it;
/// call [`AudioFeatures::clamped`] before doing arithmetic on the fields.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub volume: f64,
    pub pitch: f64,
    /// Pitch variability over the analysis window.
    pub variability: f64,
    pub spectral_centroid: f64,
    pub energy: f64,
    /// Onset sharpness of the latest transient.
    pub attack: f64,
}

impl AudioFeatures {
    pub fn new(
        volume: f64,
        pitch: f64,
        variability: f64,
        spectral_centroid: f64,
        energy: f64,
        attack: f64,
    ) -> Self {
        Self {
            volume,
            pitch,
            variability,
            spectral_centroid,
            energy,
            attack,
        }
    }

    /// Copy with every field forced into 0.0–1.0 (NaN becomes 0.0).
    pub fn clamped(&self) -> Self {
        Self {
            volume: clamp_unit(self.volume),
            pitch: clamp_unit(self.pitch),
            variability: clamp_unit(self.variability),
            spectral_centroid: clamp_unit(self.spectral_centroid),
            energy: clamp_unit(self.energy),
            attack: clamp_unit(self.attack),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_bounds_every_field() {
        let f = AudioFeatures::new(1.7, -0.2, f64::NAN, 0.5, f64::INFINITY, 0.3).clamped();
        assert_eq!(f.volume, 1.0);
        assert_eq!(f.pitch, 0.0);
        assert_eq!(f.variability, 0.0);
        assert_eq!(f.spectral_centroid, 0.5);
        assert_eq!(f.energy, 1.0);
        assert_eq!(f.attack, 0.3);
    }

    #[test]
    fn test_features_deserialize_snake_case() {
        let json = r#"{"volume":0.9,"pitch":0.2,"variability":0.1,
            "spectral_centroid":0.5,"energy":0.8,"attack":0.8}"#;
        let f: AudioFeatures = serde_json::from_str(json).unwrap();
        assert_eq!(f.spectral_centroid, 0.5);
        assert_eq!(f.attack, 0.8);
    }
}
