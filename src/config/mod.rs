//! Tunable constants for every pipeline stage.
//!
//! All fields default to the reference behavior, so an empty YAML document
//! (or [`AvatarConfig::default`]) reproduces the stock avatar. Loading a file
//! only overrides the keys it names:
//!
//! ```yaml
//! envelope:
//!   release_rate: 3.0
//! motion:
//!   expressive_weight: 0.7
//! sequencer:
//!   gesture_timeout_ms: 2500
//! ```

pub mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

// ============================================================================
// Top-level config
// ============================================================================

/// Complete pipeline configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AvatarConfig {
    #[serde(default)]
    pub envelope: EnvelopeConfig,
    #[serde(default)]
    pub emotion: EmotionConfig,
    #[serde(default)]
    pub personality: PersonalityConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub interpolation: InterpolationConfig,
    #[serde(default)]
    pub sequencer: SequencerConfig,
}

impl AvatarConfig {
    /// Parse and validate a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as unit, not as an empty map
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject values that would break the pipeline's boundedness guarantees.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let e = &self.envelope;
        non_negative("envelope.attack_rate", e.attack_rate)?;
        non_negative("envelope.attack_gain", e.attack_gain)?;
        non_negative("envelope.release_rate", e.release_rate)?;
        non_negative("envelope.transient_threshold", e.transient_threshold)?;
        unit("envelope.emphasis_rearm_below", e.emphasis_rearm_below)?;
        non_negative("envelope.emphasis_decay_rate", e.emphasis_decay_rate)?;

        unit("emotion.smoothing", self.emotion.smoothing)?;
        capacity("emotion.history_capacity", self.emotion.history_capacity)?;

        unit("personality.blend_rate", self.personality.blend_rate)?;
        capacity("personality.history_capacity", self.personality.history_capacity)?;

        let m = &self.motion;
        unit("motion.reflex_weight", m.reflex_weight)?;
        unit("motion.expressive_weight", m.expressive_weight)?;
        unit("motion.modifier_weight", m.modifier_weight)?;
        non_negative("motion.value_limit", m.value_limit)?;
        non_negative("motion.min_duration_ms", m.min_duration_ms)?;
        non_negative("motion.max_duration_ms", m.max_duration_ms)?;
        if m.min_duration_ms > m.max_duration_ms {
            return Err(ConfigError::Validation(format!(
                "motion.min_duration_ms ({}) exceeds motion.max_duration_ms ({})",
                m.min_duration_ms, m.max_duration_ms
            )));
        }
        capacity("motion.history_capacity", m.history_capacity)?;

        non_negative("interpolation.rotation_rate", self.interpolation.rotation_rate)?;
        non_negative("interpolation.scale_rate", self.interpolation.scale_rate)?;

        let s = &self.sequencer;
        if s.gesture_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "sequencer.gesture_timeout_ms must be greater than 0".into(),
            ));
        }
        if s.twist_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "sequencer.twist_timeout_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn non_negative(name: &str, v: f64) -> Result<(), ConfigError> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{} = {} must be a finite, non-negative number",
            name, v
        )))
    }
}

fn unit(name: &str, v: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{} = {} is outside 0.0..1.0",
            name, v
        )))
    }
}

fn capacity(name: &str, v: usize) -> Result<(), ConfigError> {
    if v == 0 {
        Err(ConfigError::Validation(format!("{} must be at least 1", name)))
    } else {
        Ok(())
    }
}

// ============================================================================
// Envelope follower
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// Rise coefficient; the effective step is `attack_rate × attack_gain × dt`.
    #[serde(default = "default_attack_rate")]
    pub attack_rate: f64,
    #[serde(default = "default_attack_gain")]
    pub attack_gain: f64,
    /// Decay coefficient; the effective step is `release_rate × dt`.
    #[serde(default = "default_release_rate")]
    pub release_rate: f64,
    /// Derivative (units per second) above which a transient fires.
    #[serde(default = "default_transient_threshold")]
    pub transient_threshold: f64,
    /// A new transient only latches once emphasis has fallen below this.
    #[serde(default = "default_emphasis_rearm_below")]
    pub emphasis_rearm_below: f64,
    #[serde(default = "default_emphasis_decay_rate")]
    pub emphasis_decay_rate: f64,
}

fn default_attack_rate() -> f64 {
    0.9
}
fn default_attack_gain() -> f64 {
    10.0
}
fn default_release_rate() -> f64 {
    2.0
}
fn default_transient_threshold() -> f64 {
    2.0
}
fn default_emphasis_rearm_below() -> f64 {
    0.5
}
fn default_emphasis_decay_rate() -> f64 {
    5.0
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            attack_rate: default_attack_rate(),
            attack_gain: default_attack_gain(),
            release_rate: default_release_rate(),
            transient_threshold: default_transient_threshold(),
            emphasis_rearm_below: default_emphasis_rearm_below(),
            emphasis_decay_rate: default_emphasis_decay_rate(),
        }
    }
}

// ============================================================================
// Emotion classifier
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionConfig {
    /// Weight kept from the previous frame when the label repeats.
    #[serde(default = "default_emotion_smoothing")]
    pub smoothing: f64,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_emotion_smoothing() -> f64 {
    0.7
}
fn default_history_capacity() -> usize {
    10
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            smoothing: default_emotion_smoothing(),
            history_capacity: default_history_capacity(),
        }
    }
}

// ============================================================================
// Personality blender
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityConfig {
    /// Weight given to the freshly computed profile when blending.
    #[serde(default = "default_blend_rate")]
    pub blend_rate: f64,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_blend_rate() -> f64 {
    0.8
}

impl Default for PersonalityConfig {
    fn default() -> Self {
        Self {
            blend_rate: default_blend_rate(),
            history_capacity: default_history_capacity(),
        }
    }
}

// ============================================================================
// Motion compiler
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default = "default_reflex_weight")]
    pub reflex_weight: f64,
    #[serde(default = "default_expressive_weight")]
    pub expressive_weight: f64,
    #[serde(default = "default_modifier_weight")]
    pub modifier_weight: f64,
    /// Commands are clamped to `±value_limit`.
    #[serde(default = "default_value_limit")]
    pub value_limit: f64,
    #[serde(default = "default_min_duration_ms")]
    pub min_duration_ms: f64,
    #[serde(default = "default_max_duration_ms")]
    pub max_duration_ms: f64,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_reflex_weight() -> f64 {
    0.2
}
fn default_expressive_weight() -> f64 {
    0.6
}
fn default_modifier_weight() -> f64 {
    0.2
}
fn default_value_limit() -> f64 {
    5.0
}
fn default_min_duration_ms() -> f64 {
    100.0
}
fn default_max_duration_ms() -> f64 {
    10_000.0
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reflex_weight: default_reflex_weight(),
            expressive_weight: default_expressive_weight(),
            modifier_weight: default_modifier_weight(),
            value_limit: default_value_limit(),
            min_duration_ms: default_min_duration_ms(),
            max_duration_ms: default_max_duration_ms(),
            history_capacity: default_history_capacity(),
        }
    }
}

// ============================================================================
// Parameter interpolator
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolationConfig {
    /// Per-second rate for rotation speed and rocking amplitude.
    #[serde(default = "default_rotation_rate")]
    pub rotation_rate: f64,
    /// Per-second rate for scale pulses.
    #[serde(default = "default_scale_rate")]
    pub scale_rate: f64,
}

fn default_rotation_rate() -> f64 {
    8.0
}
fn default_scale_rate() -> f64 {
    16.0
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            rotation_rate: default_rotation_rate(),
            scale_rate: default_scale_rate(),
        }
    }
}

// ============================================================================
// Discrete animation sequencer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Hard ceiling for one gesture before it is force-settled.
    #[serde(default = "default_gesture_timeout_ms")]
    pub gesture_timeout_ms: u64,
    /// Hard ceiling for one quarter-turn.
    #[serde(default = "default_twist_timeout_ms")]
    pub twist_timeout_ms: u64,
    #[serde(default = "default_scramble_moves")]
    pub scramble_moves: usize,
    /// Queue a gesture for every analyzed transcript message.
    #[serde(default = "default_gestures_from_transcripts")]
    pub gestures_from_transcripts: bool,
    /// Gestures allowed to wait behind the one in flight. A newer gesture
    /// displaces the oldest waiting one; 0 drops gestures while busy.
    #[serde(default = "default_max_queued_gestures")]
    pub max_queued_gestures: usize,
}

fn default_gesture_timeout_ms() -> u64 {
    3000
}
fn default_twist_timeout_ms() -> u64 {
    1000
}
fn default_scramble_moves() -> usize {
    20
}
fn default_gestures_from_transcripts() -> bool {
    true
}
fn default_max_queued_gestures() -> usize {
    1
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            gesture_timeout_ms: default_gesture_timeout_ms(),
            twist_timeout_ms: default_twist_timeout_ms(),
            scramble_moves: default_scramble_moves(),
            gestures_from_transcripts: default_gestures_from_transcripts(),
            max_queued_gestures: default_max_queued_gestures(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_is_reference_behavior() {
        let config = AvatarConfig::from_yaml("").unwrap();
        assert_eq!(config, AvatarConfig::default());
        assert_eq!(config.envelope.attack_rate, 0.9);
        assert_eq!(config.emotion.smoothing, 0.7);
        assert_eq!(config.personality.blend_rate, 0.8);
        assert_eq!(config.motion.expressive_weight, 0.6);
        assert_eq!(config.interpolation.scale_rate, 16.0);
        assert_eq!(config.sequencer.gesture_timeout_ms, 3000);
        assert_eq!(config.sequencer.max_queued_gestures, 1);
    }

    #[test]
    fn test_partial_yaml_overrides_only_named_keys() {
        let yaml = r#"
envelope:
  release_rate: 3.0
motion:
  expressive_weight: 0.7
"#;
        let config = AvatarConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.envelope.release_rate, 3.0);
        assert_eq!(config.envelope.attack_rate, 0.9);
        assert_eq!(config.motion.expressive_weight, 0.7);
        assert_eq!(config.motion.reflex_weight, 0.2);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = AvatarConfig::default();
        config.sequencer.scramble_moves = 7;
        let yaml = config.to_yaml().unwrap();
        let back = AvatarConfig::from_yaml(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_rejects_weight_out_of_range() {
        let err = AvatarConfig::from_yaml("motion:\n  reflex_weight: 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("motion.reflex_weight"));
    }

    #[test]
    fn test_rejects_inverted_duration_bounds() {
        let yaml = "motion:\n  min_duration_ms: 500\n  max_duration_ms: 200\n";
        assert!(matches!(
            AvatarConfig::from_yaml(yaml),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_duration_ceiling() {
        for value in [".nan", ".inf"] {
            let yaml = format!("motion:\n  max_duration_ms: {}\n", value);
            let err = AvatarConfig::from_yaml(&yaml).unwrap_err();
            assert!(err.to_string().contains("motion.max_duration_ms"));
        }
    }

    #[test]
    fn test_rejects_zero_timeout_and_capacity() {
        assert!(AvatarConfig::from_yaml("sequencer:\n  twist_timeout_ms: 0\n").is_err());
        assert!(AvatarConfig::from_yaml("emotion:\n  history_capacity: 0\n").is_err());
    }

    #[test]
    fn test_malformed_yaml_is_yaml_error() {
        let err = AvatarConfig::from_yaml("envelope: [unterminated").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "interpolation:\n  rotation_rate: 4.0").unwrap();
        let config = AvatarConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.interpolation.rotation_rate, 4.0);
        assert_eq!(config.interpolation.scale_rate, 16.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AvatarConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
