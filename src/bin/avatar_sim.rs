//! Scripted avatar session that prints frames as JSON lines.
//!
//! Plays a short conversation (call start, user speech, thinking, an
//! assistant reply, call end) through the pipeline on a 60 Hz interval.
//!
//! # Environment Variables
//!
//! - `AVATAR_CONFIG`: optional YAML config file
//! - `AVATAR_FRAMES`: number of frames to run (default: 600)
//! - `AVATAR_EVERY`: print every Nth frame (default: 10)
//! - `RUST_LOG`: tracing filter (default: "info,cube_avatar=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin avatar-sim
//! AVATAR_CONFIG=avatar.yaml AVATAR_FRAMES=1200 cargo run --bin avatar-sim
//! ```

use std::time::Duration;

use anyhow::Context;
use cube_avatar::events::{AvatarEvent, Message};
use cube_avatar::gesture::Speaker;
use cube_avatar::sequencer::DiscreteAction;
use cube_avatar::types::AudioFeatures;
use cube_avatar::{AvatarConfig, AvatarPipeline};

const FRAME_SECONDS: f64 = 1.0 / 60.0;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().with_context(|| format!("invalid {}: {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

/// Events fired at fixed frame numbers.
fn script(frame: u64) -> Vec<AvatarEvent> {
    let transcript = |role, text: &str| AvatarEvent::Message {
        message: Message::Transcript {
            role,
            transcript: text.to_string(),
        },
    };
    match frame {
        30 => vec![AvatarEvent::CallStart],
        60 => vec![AvatarEvent::SpeechStart],
        150 => vec![
            AvatarEvent::SpeechEnd,
            transcript(Speaker::User, "Hmm, what's the weather like?"),
        ],
        200 => vec![AvatarEvent::Message {
            message: Message::FunctionCall {
                name: "get_weather".to_string(),
            },
        }],
        260 => vec![transcript(Speaker::Assistant, "Great news, it's sunny and warm!")],
        480 => vec![AvatarEvent::CallEnd],
        _ => Vec::new(),
    }
}

/// Synthetic voice: a wobbling envelope while someone is talking.
fn features(frame: u64) -> (AudioFeatures, f64) {
    let t = frame as f64 * FRAME_SECONDS;
    let talking = (60..150).contains(&frame) || (260..460).contains(&frame);
    if !talking {
        return (AudioFeatures::new(0.05, 0.5, 0.05, 0.5, 0.05, 0.0), 0.02);
    }
    let syllable = (t * 7.0).sin().abs();
    let volume = 0.35 + 0.45 * syllable;
    let features = AudioFeatures::new(
        volume,
        0.5 + 0.2 * (t * 1.3).sin(),
        0.3 + 0.3 * (t * 2.1).cos().abs(),
        0.5,
        volume,
        if syllable > 0.9 { 0.7 } else { 0.2 },
    );
    (features, volume)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cube_avatar=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::var("AVATAR_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading config from {}", path);
            AvatarConfig::from_yaml_file(&path).with_context(|| format!("loading {}", path))?
        }
        Err(_) => AvatarConfig::default(),
    };
    let frames: u64 = env_or("AVATAR_FRAMES", 600)?;
    let every: u64 = env_or::<u64>("AVATAR_EVERY", 10)?.max(1);

    let mut pipeline = AvatarPipeline::new(config);
    let mut interval = tokio::time::interval(Duration::from_secs_f64(FRAME_SECONDS));

    tracing::info!("Running {} frames", frames);
    for frame in 0..frames {
        interval.tick().await;

        for event in script(frame) {
            pipeline.handle_event(&event);
        }
        let (features, volume) = features(frame);
        pipeline.handle_event(&AvatarEvent::VolumeLevel { volume });

        if frame == 520 {
            let tickets = pipeline.cube().scramble(&mut rand::thread_rng());
            tracing::info!("Queued {} scramble twists", tickets.len());
        }

        let output = pipeline.tick(FRAME_SECONDS, &features);
        // twists render in a single frame; gestures are left to their timeout
        if let Some(request) = output.animating {
            if matches!(request.action, DiscreteAction::Twist(_)) {
                pipeline.cube().complete(request.id);
            }
        }
        if frame % every == 0 || !output.events.is_empty() {
            println!("{}", serde_json::to_string(&output)?);
        }
    }

    tracing::info!(
        "Session finished after {} frames (cube solved: {})",
        pipeline.frame(),
        pipeline.cube().is_solved()
    );
    Ok(())
}
