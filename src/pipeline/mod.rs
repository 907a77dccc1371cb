//! The per-frame pipeline that owns every engine.
//!
//! ```text
//! AvatarEvent ──▶ FrameInput (last value wins)
//!                     │
//! tick(dt, features)  ▼
//!   EnvelopeFollower ─────────────────────────────┐
//!   EmotionEngine ─▶ PersonalityEngine            │
//!        │                 │                      │
//!        ▼                 ▼                      ▼
//!   StateSelector ─▶ MotionCompiler    ParameterInterpolator
//!        │                 │            (conversation state)
//!        ▼                 ▼
//!   LightingEngine, LedEngine          CubeController (gestures, twists)
//!                     │
//!                     ▼
//!                FrameOutput
//! ```

pub mod frame;

pub use frame::FrameOutput;

use crate::animation::ParameterInterpolator;
use crate::audio::EnvelopeFollower;
use crate::config::AvatarConfig;
use crate::cube::CubeController;
use crate::emotion::EmotionEngine;
use crate::events::{AvatarEvent, FrameInput};
use crate::lighting::{LedEngine, LightingEngine};
use crate::motion::MotionCompiler;
use crate::persona::PersonalityEngine;
use crate::sequencer::Urgency;
use crate::state::StateSelector;
use crate::types::{AudioFeatures, EmotionOutput, PersonalityProfile};

#[derive(Debug)]
pub struct AvatarPipeline {
    config: AvatarConfig,
    input: FrameInput,
    envelope: EnvelopeFollower,
    emotion_engine: EmotionEngine,
    personality_engine: PersonalityEngine,
    selector: StateSelector,
    motion: MotionCompiler,
    interpolator: ParameterInterpolator,
    lighting: LightingEngine,
    leds: LedEngine,
    cube: CubeController,
    emotion: EmotionOutput,
    personality: PersonalityProfile,
    frame: u64,
}

impl Default for AvatarPipeline {
    fn default() -> Self {
        Self::new(AvatarConfig::default())
    }
}

impl AvatarPipeline {
    pub fn new(config: AvatarConfig) -> Self {
        Self {
            input: FrameInput::default(),
            envelope: EnvelopeFollower::new(config.envelope.clone()),
            emotion_engine: EmotionEngine::new(config.emotion.clone()),
            personality_engine: PersonalityEngine::new(config.personality.clone()),
            selector: StateSelector::new(),
            motion: MotionCompiler::new(config.motion.clone()),
            interpolator: ParameterInterpolator::new(config.interpolation.clone()),
            lighting: LightingEngine::new(),
            leds: LedEngine::new(),
            cube: CubeController::new(config.sequencer.clone()),
            emotion: EmotionOutput::default(),
            personality: PersonalityProfile::default(),
            frame: 0,
            config,
        }
    }

    /// Record a conversation event for the next tick.
    pub fn handle_event(&mut self, event: &AvatarEvent) {
        log::debug!("event {}", event.name());
        self.input
            .apply(event, self.config.sequencer.gestures_from_transcripts);
    }

    /// Run one frame of `delta_time` seconds.
    pub fn tick(&mut self, delta_time: f64, features: &AudioFeatures) -> FrameOutput {
        self.interpolator.set_state(self.input.conversation_state);
        let envelope = self.envelope.update(self.input.raw_energy, delta_time);

        let emotion = self.emotion_engine.analyze_emotion(features);
        let personality = self
            .personality_engine
            .compute_personality(&emotion, Some(&self.personality));
        let cube_state = self.selector.select(&emotion);

        let motions = self.motion.compile_motions(cube_state, &emotion, &personality);
        let animation = self.interpolator.update(delta_time, envelope);
        let lighting = self.lighting.update_lighting(&emotion, &personality, delta_time);
        let leds = self.leds.update_leds(cube_state, &personality);

        for gesture in self.input.take_pending_gestures() {
            // the pipeline reports settles through frame events instead
            let _ = self.cube.play_gesture(gesture, Urgency::Queued);
        }
        self.cube.advance(delta_time);

        self.emotion = emotion;
        self.personality = personality;
        self.frame += 1;

        log::trace!(
            "frame {}: {} / {} energy={:.3} emotion={} dominant={}",
            self.frame,
            self.input.conversation_state,
            cube_state,
            envelope.smoothed_energy,
            emotion.emotion,
            personality.dominant.as_str()
        );

        FrameOutput {
            frame: self.frame,
            conversation_state: self.input.conversation_state,
            cube_state,
            gesture_emotion: self.input.gesture_emotion,
            envelope,
            emotion,
            personality,
            motions,
            animation,
            lighting,
            leds,
            animating: self.cube.sequencer().in_flight().copied(),
            events: self.cube.take_events(),
        }
    }

    pub fn config(&self) -> &AvatarConfig {
        &self.config
    }

    pub fn input(&self) -> &FrameInput {
        &self.input
    }

    /// Discrete cube control (twists, scramble, completion callbacks).
    pub fn cube(&mut self) -> &mut CubeController {
        &mut self.cube
    }

    pub fn emotion(&self) -> EmotionOutput {
        self.emotion
    }

    pub fn personality(&self) -> PersonalityProfile {
        self.personality
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Back to the freshly constructed state. Pending animations are cancelled.
    pub fn reset(&mut self) {
        self.cube.abort();
        *self = Self::new(self.config.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Message;
    use crate::gesture::{GestureEmotion, Speaker};
    use crate::sequencer::{AnimationOutcome, DiscreteAction, SequencerEvent};
    use crate::types::{CubeState, Emotion};

    const FRAME: f64 = 1.0 / 60.0;

    fn quiet() -> AudioFeatures {
        AudioFeatures::new(0.1, 0.5, 0.1, 0.5, 0.1, 0.1)
    }

    #[test]
    fn test_quiet_session_stays_idle() {
        let mut pipeline = AvatarPipeline::default();
        let mut last = None;
        for _ in 0..100 {
            last = Some(pipeline.tick(FRAME, &quiet()));
        }
        let out = last.unwrap();
        assert_eq!(out.frame, 100);
        assert_eq!(out.cube_state, CubeState::Idle);
        assert_eq!(out.conversation_state, CubeState::Idle);
        assert_eq!(out.animation.global_rotation_speed.y, 5.0);
        assert!((out.personality.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_high_intensity_frame_responds() {
        let mut pipeline = AvatarPipeline::default();
        let features = AudioFeatures::new(0.5, 0.5, 0.5, 0.5, 1.0, 0.2);
        let out = pipeline.tick(FRAME, &features);
        assert_eq!(out.emotion.emotion, Emotion::Calm);
        assert!((out.emotion.intensity - 0.65).abs() < 1e-12);
        assert_eq!(out.cube_state, CubeState::Responding);
        assert_eq!(out.leds.faces[0][0].shader_name.as_deref(), Some("heatmap"));
    }

    #[test]
    fn test_events_drive_the_interpolator() {
        let mut pipeline = AvatarPipeline::default();
        pipeline.handle_event(&AvatarEvent::CallStart);
        pipeline.handle_event(&AvatarEvent::SpeechEnd);
        let mut out = pipeline.tick(FRAME, &quiet());
        for _ in 0..120 {
            out = pipeline.tick(FRAME, &quiet());
        }
        assert_eq!(out.conversation_state, CubeState::Thinking);
        assert!((out.animation.global_rotation_speed.y - 60.0).abs() < 1e-3);
        assert_eq!(out.cube_state, CubeState::Idle);
    }

    #[test]
    fn test_volume_level_feeds_the_envelope() {
        let mut pipeline = AvatarPipeline::default();
        pipeline.handle_event(&AvatarEvent::VolumeLevel { volume: 0.8 });
        let out = pipeline.tick(FRAME, &quiet());
        assert!(out.envelope.smoothed_energy > 0.0);
        assert!(out.envelope.smoothed_energy <= 0.8);
    }

    #[test]
    fn test_transcript_plays_gesture() {
        let mut pipeline = AvatarPipeline::default();
        pipeline.handle_event(&AvatarEvent::Message {
            message: Message::Transcript {
                role: Speaker::Assistant,
                transcript: "wow, wonderful".into(),
            },
        });
        let out = pipeline.tick(FRAME, &quiet());
        assert_eq!(out.gesture_emotion, GestureEmotion::Excited);
        let started = out.animating.unwrap();
        assert_eq!(
            started.action,
            DiscreteAction::Gesture {
                emotion: GestureEmotion::Excited
            }
        );
        assert!(matches!(out.events[..], [SequencerEvent::Started { .. }]));

        // settles by timeout after three seconds of frames
        let mut settled = false;
        for _ in 0..200 {
            let out = pipeline.tick(FRAME, &quiet());
            settled |= out.events.iter().any(|e| {
                matches!(e, SequencerEvent::Settled { outcome: AnimationOutcome::TimedOut, .. })
            });
        }
        assert!(settled);
    }

    #[test]
    fn test_steady_transcripts_keep_gesture_queue_bounded() {
        let mut pipeline = AvatarPipeline::default();
        for frame in 0..600 {
            if frame % 6 == 0 {
                pipeline.handle_event(&AvatarEvent::Message {
                    message: Message::Transcript {
                        role: Speaker::Assistant,
                        transcript: "that's awesome".into(),
                    },
                });
            }
            pipeline.tick(FRAME, &quiet());
            assert!(pipeline.cube().sequencer().queue_len() <= 1);
        }
    }

    #[test]
    fn test_zero_delta_frame_keeps_animation() {
        let mut pipeline = AvatarPipeline::default();
        let before = pipeline.tick(FRAME, &quiet()).animation;
        let after = pipeline.tick(0.0, &quiet()).animation;
        assert_eq!(before, after);
    }

    #[test]
    fn test_frame_output_serializes() {
        let mut pipeline = AvatarPipeline::default();
        let out = pipeline.tick(FRAME, &quiet());
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["cube_state"], "idle");
        assert_eq!(json["leds"]["faces"].as_array().map(|f| f.len()), Some(6));
        let palette = crate::lighting::palette_for(out.personality.dominant);
        assert_eq!(out.lighting.texture_type, palette.texture_type);
    }

    #[test]
    fn test_reset_restarts_frames() {
        let mut pipeline = AvatarPipeline::default();
        pipeline.handle_event(&AvatarEvent::SpeechStart);
        pipeline.tick(FRAME, &quiet());
        pipeline.reset();
        assert_eq!(pipeline.frame(), 0);
        assert_eq!(pipeline.input().conversation_state, CubeState::Idle);
    }
}
