//! Keyword-based gesture selection from transcript messages.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::GestureEmotion;

/// Who produced a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

// Substring matches, case-insensitive: "what" also fires inside "whatever".
static EXCITED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)amazing|awesome|great|fantastic|wonderful|excellent|wow")
        .expect("static pattern")
});
static CONFUSED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)confused|don't understand|what|huh|unclear|not sure").expect("static pattern")
});
static HAPPY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)happy|glad|pleased|thank|thanks|good|nice").expect("static pattern")
});
static THINKING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)hmm|let me think|considering|analyzing|processing").expect("static pattern")
});

/// Pick a gesture for one transcript line.
///
/// Assistant lines choose between excited, happy, thinking and calm; user
/// lines between confused, surprised and listening. Earlier checks win.
pub fn analyze_transcript(text: &str, speaker: Speaker) -> GestureEmotion {
    match speaker {
        Speaker::Assistant => {
            if EXCITED.is_match(text) {
                GestureEmotion::Excited
            } else if HAPPY.is_match(text) {
                GestureEmotion::Happy
            } else if THINKING.is_match(text) {
                GestureEmotion::Thinking
            } else {
                GestureEmotion::Calm
            }
        }
        Speaker::User => {
            if CONFUSED.is_match(text) {
                GestureEmotion::Confused
            } else if EXCITED.is_match(text) {
                GestureEmotion::Surprised
            } else {
                GestureEmotion::Listening
            }
        }
    }
}
