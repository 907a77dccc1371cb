//! Last-value-wins inputs for the next frame.

use serde::{Deserialize, Serialize};

use crate::gesture::{analyze_transcript, GestureEmotion};
use crate::types::CubeState;

use super::types::{AvatarEvent, Message};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// State set by conversation events; drives the interpolator preset.
    pub conversation_state: CubeState,
    /// Mood most recently implied by an event.
    pub gesture_emotion: GestureEmotion,
    /// Last reported volume, fed to the envelope follower every frame.
    pub raw_energy: f64,
    /// Gestures analyzed from transcripts, queued on the next tick.
    pub pending_gestures: Vec<GestureEmotion>,
}

impl FrameInput {
    /// Write an event's effects. `analyze_transcripts` controls whether
    /// transcript messages also request a gesture.
    pub fn apply(&mut self, event: &AvatarEvent, analyze_transcripts: bool) {
        let effect = event.effect();
        if let Some(state) = effect.state {
            self.conversation_state = state;
        }
        if let Some(gesture) = effect.gesture {
            self.gesture_emotion = gesture;
        }
        if let Some(energy) = effect.raw_energy {
            self.raw_energy = energy;
        }

        match event {
            AvatarEvent::Message {
                message: Message::Transcript { role, transcript },
            } if analyze_transcripts => {
                let gesture = analyze_transcript(transcript, *role);
                self.gesture_emotion = gesture;
                self.pending_gestures.push(gesture);
            }
            AvatarEvent::Error { message } => log::warn!("voice session error: {}", message),
            _ => {}
        }
    }

    pub fn take_pending_gestures(&mut self) -> Vec<GestureEmotion> {
        std::mem::take(&mut self.pending_gestures)
    }
}
