//! Base motion pattern library.
//!
//! Listening and responding patterns are keyed by emotion, thinking and idle
//! patterns by dominant trait. A missing key falls back to the calm (or
//! calm_genius) entry, and a missing fallback yields no base motion.

use crate::types::{Axis, CubeState, Easing, Emotion, MotionCommand, MotionTarget, Trait};

use Axis::{Y, Z};
use Easing::{EaseInOutQuad, EaseInOutSine, EaseOutBounce, EaseOutCubic};
use MotionTarget::{Global, H1, V2};

const LISTENING_EXCITED: &[MotionCommand] = &[
    MotionCommand::new(Global, Y, 1.5, 500.0, EaseOutBounce),
    MotionCommand::new(V2, Z, 1.25, 400.0, EaseInOutQuad),
];
const LISTENING_CALM: &[MotionCommand] = &[MotionCommand::new(Global, Y, 0.4, 2500.0, EaseInOutSine)];

const THINKING_CALM_GENIUS: &[MotionCommand] = &[
    MotionCommand::new(Global, Y, 1.5, 4000.0, EaseInOutSine),
    MotionCommand::new(H1, Y, 0.75, 3500.0, EaseInOutSine),
];

const RESPONDING_ANGRY: &[MotionCommand] = &[
    MotionCommand::new(Global, Y, 2.5, 800.0, EaseOutCubic),
    MotionCommand::new(H1, Y, -1.5, 600.0, EaseOutCubic),
];

const IDLE_PLAYFUL: &[MotionCommand] = &[
    MotionCommand::new(Global, Y, 0.75, 3000.0, EaseInOutSine),
    MotionCommand::new(V2, Z, 0.4, 3500.0, EaseInOutSine),
];

fn listening(emotion: Emotion) -> Option<&'static [MotionCommand]> {
    match emotion {
        Emotion::Excited => Some(LISTENING_EXCITED),
        Emotion::Calm => Some(LISTENING_CALM),
        _ => None,
    }
}

fn responding(emotion: Emotion) -> Option<&'static [MotionCommand]> {
    match emotion {
        Emotion::Angry => Some(RESPONDING_ANGRY),
        _ => None,
    }
}

fn thinking(dominant: Trait) -> Option<&'static [MotionCommand]> {
    match dominant {
        Trait::CalmGenius => Some(THINKING_CALM_GENIUS),
        _ => None,
    }
}

fn idle(dominant: Trait) -> Option<&'static [MotionCommand]> {
    match dominant {
        Trait::Playful => Some(IDLE_PLAYFUL),
        _ => None,
    }
}

/// Look up the expressive base layer. Never fails; may be empty.
pub fn base_pattern(state: CubeState, emotion: Emotion, dominant: Trait) -> &'static [MotionCommand] {
    let found = match state {
        CubeState::Listening => listening(emotion).or_else(|| listening(Emotion::Calm)),
        CubeState::Responding => responding(emotion).or_else(|| responding(Emotion::Calm)),
        CubeState::Thinking => thinking(dominant).or_else(|| thinking(Trait::CalmGenius)),
        CubeState::Idle => idle(dominant).or_else(|| idle(Trait::CalmGenius)),
    };
    found.unwrap_or(&[])
}
