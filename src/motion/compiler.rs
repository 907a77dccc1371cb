//! Layered motion compilation.
//!
//! Three layers are produced per frame and blended by `(target, axis)`:
//!
//! | layer      | source                         | default weight |
//! |------------|--------------------------------|----------------|
//! | reflex     | emotion label and intensity    | 0.2            |
//! | expressive | base pattern library           | 0.6            |
//! | modifier   | state and personality          | 0.2            |
//!
//! Colliding keys sum their weighted values and keep the longer duration.
//! The result is clamped into the configured value and duration range.

use crate::config::MotionConfig;
use crate::types::{
    Axis, CubeState, Easing, Emotion, EmotionOutput, MotionCommand, MotionTarget, PersonalityProfile,
};
use crate::utilities::BoundedHistory;

use super::patterns::base_pattern;

/// Empathy weight above which responding motion gains a forward nod.
const EMPATHETIC_NOD_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct MotionCompiler {
    config: MotionConfig,
    history: BoundedHistory<Vec<MotionCommand>>,
}

impl Default for MotionCompiler {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl MotionCompiler {
    pub fn new(config: MotionConfig) -> Self {
        let history = BoundedHistory::new(config.history_capacity);
        Self { config, history }
    }

    /// Compile one frame of motion commands, at most one per `(target, axis)`.
    pub fn compile_motions(
        &mut self,
        state: CubeState,
        emotion: &EmotionOutput,
        personality: &PersonalityProfile,
    ) -> Vec<MotionCommand> {
        let expressive = base_pattern(state, emotion.emotion, personality.dominant);
        let reflex = reflex_layer(emotion);
        let modifier = modifier_layer(state, personality);

        let c = &self.config;
        let mut blended = Vec::with_capacity(reflex.len() + expressive.len() + modifier.len());
        accumulate(&mut blended, &reflex, c.reflex_weight);
        accumulate(&mut blended, expressive, c.expressive_weight);
        accumulate(&mut blended, &modifier, c.modifier_weight);
        if blended.is_empty() {
            blended = expressive.to_vec();
        }

        let commands: Vec<MotionCommand> = blended.into_iter().map(|cmd| self.finalize(cmd)).collect();
        log::trace!("compiled {} motion commands for {}", commands.len(), state);

        self.history.push(commands.clone());
        commands
    }

    fn finalize(&self, cmd: MotionCommand) -> MotionCommand {
        // bounds are normalized here too, since a config built in code skips validation
        let limit = if self.config.value_limit.is_nan() { 0.0 } else { self.config.value_limit.abs() };
        let min = if self.config.min_duration_ms.is_finite() { self.config.min_duration_ms.max(0.0) } else { 0.0 };
        let max = self.config.max_duration_ms.max(min);

        let value = if cmd.value.is_nan() { 0.0 } else { cmd.value.clamp(-limit, limit) };
        let duration = if cmd.duration.is_nan() { min } else { cmd.duration.clamp(min, max) };
        MotionCommand { value, duration, ..cmd }
    }

    /// Recently compiled command sets, oldest first.
    pub fn history(&self) -> Vec<Vec<MotionCommand>> {
        self.history.to_vec()
    }

    /// The most recently compiled command set.
    pub fn latest(&self) -> Option<&[MotionCommand]> {
        self.history.latest().map(Vec::as_slice)
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

/// Immediate reaction to sharp emotions: a recoil when angry, a hop when
/// excited.
fn reflex_layer(emotion: &EmotionOutput) -> Vec<MotionCommand> {
    let i = emotion.intensity;
    match emotion.emotion {
        Emotion::Angry => vec![MotionCommand::new(
            MotionTarget::Global,
            Axis::X,
            -0.25 * i,
            300.0,
            Easing::EaseOutCubic,
        )],
        Emotion::Excited => vec![MotionCommand::new(
            MotionTarget::Global,
            Axis::Y,
            0.5 * i,
            200.0,
            Easing::EaseOutBounce,
        )],
        _ => Vec::new(),
    }
}

fn modifier_layer(state: CubeState, personality: &PersonalityProfile) -> Vec<MotionCommand> {
    if state == CubeState::Responding && personality.empathetic > EMPATHETIC_NOD_THRESHOLD {
        vec![MotionCommand::new(
            MotionTarget::Global,
            Axis::X,
            0.05 * personality.empathetic,
            800.0,
            Easing::EaseInOutSine,
        )]
    } else {
        Vec::new()
    }
}

/// Fold `layer` into `acc` in first-insertion order. On a key collision the
/// incoming command's easing replaces the existing one.
fn accumulate(acc: &mut Vec<MotionCommand>, layer: &[MotionCommand], weight: f64) {
    for cmd in layer {
        let weighted = cmd.value * weight;
        match acc.iter_mut().find(|c| c.key() == cmd.key()) {
            Some(existing) => {
                existing.value += weighted;
                existing.duration = existing.duration.max(cmd.duration);
                existing.easing = cmd.easing;
            }
            None => acc.push(MotionCommand { value: weighted, ..*cmd }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Trait;

    fn reading(emotion: Emotion, intensity: f64) -> EmotionOutput {
        EmotionOutput {
            emotion,
            intensity,
            ..EmotionOutput::default()
        }
    }

    fn assert_bounded_and_unique(commands: &[MotionCommand]) {
        for (i, c) in commands.iter().enumerate() {
            assert!((-5.0..=5.0).contains(&c.value), "{:?}", c);
            assert!((100.0..=10_000.0).contains(&c.duration), "{:?}", c);
            assert!(commands[i + 1..].iter().all(|o| o.key() != c.key()));
        }
    }

    #[test]
    fn test_excited_listening_blends_reflex_into_base() {
        let mut compiler = MotionCompiler::default();
        let personality = PersonalityProfile::default();
        let cmds = compiler.compile_motions(CubeState::Listening, &reading(Emotion::Excited, 1.0), &personality);

        assert_eq!(cmds.len(), 2);
        let global_y = cmds[0];
        assert_eq!(global_y.key(), (MotionTarget::Global, Axis::Y));
        // reflex 0.5 × 0.2 + base 1.5 × 0.6
        assert!((global_y.value - 1.0).abs() < 1e-12);
        assert_eq!(global_y.duration, 500.0);
        assert_eq!(global_y.easing, Easing::EaseOutBounce);

        assert_eq!(cmds[1].key(), (MotionTarget::V2, Axis::Z));
        assert!((cmds[1].value - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_angry_reflex_without_base() {
        let mut compiler = MotionCompiler::default();
        let cmds = compiler.compile_motions(
            CubeState::Listening,
            &reading(Emotion::Angry, 1.0),
            &PersonalityProfile::default(),
        );
        // reflex recoil on x, calm fallback on y
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].key(), (MotionTarget::Global, Axis::X));
        assert!((cmds[0].value + 0.05).abs() < 1e-12);
        assert_eq!(cmds[0].duration, 300.0);
    }

    #[test]
    fn test_empathetic_modifier_only_when_responding() {
        let mut compiler = MotionCompiler::default();
        let personality = PersonalityProfile::from_weights([0.1, 0.1, 0.1, 0.1, 0.6]);
        assert_eq!(personality.dominant, Trait::Empathetic);

        let responding = compiler.compile_motions(CubeState::Responding, &reading(Emotion::Calm, 0.7), &personality);
        assert_eq!(responding.len(), 1);
        assert!((responding[0].value - 0.05 * 0.6 * 0.2).abs() < 1e-12);
        assert_eq!(responding[0].easing, Easing::EaseInOutSine);

        let listening = compiler.compile_motions(CubeState::Listening, &reading(Emotion::Calm, 0.4), &personality);
        assert!(listening.iter().all(|c| c.key() != (MotionTarget::Global, Axis::X)));
    }

    #[test]
    fn test_empty_blend_yields_empty_frame() {
        let mut compiler = MotionCompiler::default();
        let personality = PersonalityProfile::from_weights([0.1, 0.1, 0.6, 0.1, 0.1]);
        let cmds = compiler.compile_motions(CubeState::Idle, &reading(Emotion::Calm, 0.1), &personality);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_output_is_clamped() {
        let config = MotionConfig {
            expressive_weight: 1.0,
            value_limit: 1.0,
            min_duration_ms: 1000.0,
            max_duration_ms: 3000.0,
            ..MotionConfig::default()
        };
        let mut compiler = MotionCompiler::new(config);
        let cmds = compiler.compile_motions(
            CubeState::Responding,
            &reading(Emotion::Angry, 1.0),
            &PersonalityProfile::default(),
        );
        let global_y = cmds.iter().find(|c| c.key() == (MotionTarget::Global, Axis::Y)).unwrap();
        assert_eq!(global_y.value, 1.0);
        let h1 = cmds.iter().find(|c| c.target == MotionTarget::H1).unwrap();
        assert_eq!(h1.value, -1.0);
        assert_eq!(h1.duration, 1000.0);
    }

    #[test]
    fn test_unvalidated_bounds_never_panic() {
        let config = MotionConfig {
            value_limit: f64::NAN,
            min_duration_ms: 400.0,
            max_duration_ms: f64::NAN,
            ..MotionConfig::default()
        };
        let mut compiler = MotionCompiler::new(config);
        let cmds = compiler.compile_motions(CubeState::Thinking, &EmotionOutput::default(), &PersonalityProfile::default());
        assert!(!cmds.is_empty());
        assert!(cmds.iter().all(|c| c.value == 0.0 && c.duration == 400.0));

        let inverted = MotionConfig {
            min_duration_ms: 800.0,
            max_duration_ms: 200.0,
            ..MotionConfig::default()
        };
        let mut compiler = MotionCompiler::new(inverted);
        let cmds = compiler.compile_motions(CubeState::Thinking, &EmotionOutput::default(), &PersonalityProfile::default());
        assert!(cmds.iter().all(|c| c.duration == 800.0));
    }

    #[test]
    fn test_all_combinations_bounded_and_unique() {
        let mut compiler = MotionCompiler::default();
        for state in CubeState::ALL {
            for emotion in Emotion::ALL {
                for t in Trait::ALL {
                    let mut w = [0.1; 5];
                    w[Trait::ALL.iter().position(|x| *x == t).unwrap()] = 0.6;
                    let p = PersonalityProfile::from_weights(w);
                    let cmds = compiler.compile_motions(state, &reading(emotion, 1.0), &p);
                    assert_bounded_and_unique(&cmds);
                }
            }
        }
    }

    #[test]
    fn test_history_is_capped() {
        let mut compiler = MotionCompiler::default();
        for _ in 0..12 {
            compiler.compile_motions(CubeState::Thinking, &EmotionOutput::default(), &PersonalityProfile::default());
        }
        assert_eq!(compiler.history().len(), 10);
        assert_eq!(compiler.latest().map(|c| c.len()), Some(2));
        compiler.reset();
        assert!(compiler.latest().is_none());
    }
}
