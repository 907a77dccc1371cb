use serde::{Deserialize, Serialize};

use crate::audio::EnvelopeReading;
use crate::gesture::GestureEmotion;
use crate::sequencer::{AnimationRequest, SequencerEvent};
use crate::types::{
    AnimationParams, CubeState, EmotionOutput, LedState, LightingState, MotionCommand, PersonalityProfile,
};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    pub frame: u64,
    /// State set by conversation events.
    pub conversation_state: CubeState,
    /// State classified from this frame's audio.
    pub cube_state: CubeState,
    pub gesture_emotion: GestureEmotion,
    pub envelope: EnvelopeReading,
    pub emotion: EmotionOutput,
    pub personality: PersonalityProfile,
    pub motions: Vec<MotionCommand>,
    pub animation: AnimationParams,
    pub lighting: LightingState,
    pub leds: LedState,
    /// The discrete animation in flight after this frame, if any.
    pub animating: Option<AnimationRequest>,
    /// Discrete animations started or settled during this frame.
    pub events: Vec<SequencerEvent>,
}
