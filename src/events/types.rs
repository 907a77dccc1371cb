//! Wire-level conversation events.

use serde::{Deserialize, Serialize};

use crate::gesture::{GestureEmotion, Speaker};
use crate::types::CubeState;

/// A transcript or tool message from the voice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Message {
    Transcript { role: Speaker, transcript: String },
    FunctionCall { name: String },
}

/// Everything the voice session can tell the avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AvatarEvent {
    CallStart,
    CallEnd,
    SpeechStart,
    SpeechEnd,
    /// Raw loudness for the envelope follower, nominally 0.0–1.0.
    VolumeLevel { volume: f64 },
    Message { message: Message },
    Error { message: String },
}

/// Fixed consequences of one event; `None` leaves the field untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventEffect {
    pub state: Option<CubeState>,
    pub gesture: Option<GestureEmotion>,
    pub raw_energy: Option<f64>,
}

impl AvatarEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AvatarEvent::CallStart => "call-start",
            AvatarEvent::CallEnd => "call-end",
            AvatarEvent::SpeechStart => "speech-start",
            AvatarEvent::SpeechEnd => "speech-end",
            AvatarEvent::VolumeLevel { .. } => "volume-level",
            AvatarEvent::Message { .. } => "message",
            AvatarEvent::Error { .. } => "error",
        }
    }

    pub fn effect(&self) -> EventEffect {
        let (state, gesture) = match self {
            AvatarEvent::CallStart => (Some(CubeState::Listening), Some(GestureEmotion::Happy)),
            AvatarEvent::CallEnd => (Some(CubeState::Idle), Some(GestureEmotion::Neutral)),
            AvatarEvent::SpeechStart => (Some(CubeState::Listening), Some(GestureEmotion::Listening)),
            AvatarEvent::SpeechEnd => (Some(CubeState::Thinking), Some(GestureEmotion::Thinking)),
            AvatarEvent::VolumeLevel { volume } => {
                return EventEffect {
                    raw_energy: Some(*volume),
                    ..EventEffect::default()
                };
            }
            AvatarEvent::Message { message } => match message {
                Message::Transcript {
                    role: Speaker::Assistant,
                    ..
                } => (Some(CubeState::Responding), None),
                Message::Transcript {
                    role: Speaker::User, ..
                } => (Some(CubeState::Listening), None),
                Message::FunctionCall { .. } => (Some(CubeState::Thinking), Some(GestureEmotion::Thinking)),
            },
            AvatarEvent::Error { .. } => (None, Some(GestureEmotion::Confused)),
        };
        EventEffect {
            state,
            gesture,
            raw_energy: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_format() {
        let event: AvatarEvent = serde_json::from_str(r#"{"type":"volume-level","volume":0.4}"#).unwrap();
        assert_eq!(event, AvatarEvent::VolumeLevel { volume: 0.4 });

        let event: AvatarEvent = serde_json::from_str(
            r#"{"type":"message","message":{"type":"transcript","role":"assistant","transcript":"hi"}}"#,
        )
        .unwrap();
        assert_eq!(event.name(), "message");
        assert_eq!(event.effect().state, Some(CubeState::Responding));
    }

    #[test]
    fn test_fixed_mappings() {
        let call_start = AvatarEvent::CallStart.effect();
        assert_eq!(call_start.state, Some(CubeState::Listening));
        assert_eq!(call_start.gesture, Some(GestureEmotion::Happy));

        let call_end = AvatarEvent::CallEnd.effect();
        assert_eq!(call_end.state, Some(CubeState::Idle));
        assert_eq!(call_end.gesture, Some(GestureEmotion::Neutral));

        assert_eq!(AvatarEvent::SpeechEnd.effect().state, Some(CubeState::Thinking));

        let function = AvatarEvent::Message {
            message: Message::FunctionCall {
                name: "lookup".into(),
            },
        };
        assert_eq!(function.effect().state, Some(CubeState::Thinking));

        let user = AvatarEvent::Message {
            message: Message::Transcript {
                role: Speaker::User,
                transcript: "hello".into(),
            },
        };
        assert_eq!(user.effect().state, Some(CubeState::Listening));
    }

    #[test]
    fn test_error_keeps_state() {
        let effect = AvatarEvent::Error {
            message: "socket closed".into(),
        }
        .effect();
        assert_eq!(effect.state, None);
        assert_eq!(effect.gesture, Some(GestureEmotion::Confused));
    }
}
