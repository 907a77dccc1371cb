//! Discrete controller: the piece model behind the animation sequencer.
//!
//! A twist changes the piece model only when the renderer reports that its
//! animation completed. A timed-out twist releases its caller but leaves the
//! pieces as they were, and so does a dropped or cancelled one.

use rand::Rng;
use uuid::Uuid;

use crate::config::SequencerConfig;
use crate::gesture::{GestureEmotion, MovementPattern};
use crate::sequencer::{AnimationSequencer, AnimationTicket, DiscreteAction, SequencerEvent, Urgency};
use crate::types::Axis;

use super::model::{CubeModel, Twist};

#[derive(Debug)]
pub struct CubeController {
    model: CubeModel,
    sequencer: AnimationSequencer,
    scramble_moves: usize,
    events: Vec<SequencerEvent>,
}

impl Default for CubeController {
    fn default() -> Self {
        Self::new(SequencerConfig::default())
    }
}

impl CubeController {
    pub fn new(config: SequencerConfig) -> Self {
        let scramble_moves = config.scramble_moves;
        Self {
            model: CubeModel::solved(),
            sequencer: AnimationSequencer::new(config),
            scramble_moves,
            events: Vec::new(),
        }
    }

    /// Request one quarter turn now. Dropped if anything is animating.
    pub fn twist(&mut self, twist: Twist) -> AnimationTicket {
        let ticket = self.sequencer.submit(DiscreteAction::Twist(twist), Urgency::Urgent);
        self.sync();
        ticket
    }

    /// Queue the configured number of random outer-layer twists.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<AnimationTicket> {
        log::debug!("scrambling with {} moves", self.scramble_moves);
        let tickets = (0..self.scramble_moves)
            .map(|_| {
                let twist = Twist {
                    axis: Axis::ALL[rng.gen_range(0..Axis::ALL.len())],
                    layer: if rng.gen_bool(0.5) { 1 } else { -1 },
                    direction: if rng.gen_bool(0.5) { 1 } else { -1 },
                };
                self.sequencer.submit(DiscreteAction::Twist(twist), Urgency::Queued)
            })
            .collect();
        self.sync();
        tickets
    }

    pub fn play_gesture(&mut self, emotion: GestureEmotion, urgency: Urgency) -> AnimationTicket {
        let ticket = self.sequencer.submit(DiscreteAction::Gesture { emotion }, urgency);
        self.sync();
        ticket
    }

    /// Restore the solved model. Ignored while an animation is in flight.
    pub fn reset(&mut self) -> bool {
        if self.sequencer.is_busy() {
            log::debug!("ignoring cube reset while animating");
            return false;
        }
        self.model.reset();
        true
    }

    /// Cancel every pending animation, then restore the solved model.
    pub fn abort(&mut self) {
        self.sequencer.reset();
        self.sync();
        self.model.reset();
    }

    /// The renderer finished the animation with this id.
    pub fn complete(&mut self, id: Uuid) -> bool {
        let done = self.sequencer.complete(id);
        self.sync();
        done
    }

    pub fn advance(&mut self, delta_time: f64) {
        self.sequencer.advance(delta_time);
        self.sync();
    }

    /// Lifecycle events since the last call, after their effects were applied.
    pub fn take_events(&mut self) -> Vec<SequencerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn model(&self) -> &CubeModel {
        &self.model
    }

    pub fn is_solved(&self) -> bool {
        self.model.is_solved()
    }

    pub fn is_animating(&self) -> bool {
        self.sequencer.is_busy()
    }

    pub fn sequencer(&self) -> &AnimationSequencer {
        &self.sequencer
    }

    fn sync(&mut self) {
        for event in self.sequencer.take_events() {
            if let SequencerEvent::Settled { request, outcome } = &event {
                if outcome.is_applied() {
                    self.apply(&request.action);
                }
            }
            self.events.push(event);
        }
    }

    fn apply(&mut self, action: &DiscreteAction) {
        match action {
            DiscreteAction::Twist(twist) => self.model.apply_twist(*twist),
            DiscreteAction::Gesture { emotion } => {
                for pattern in emotion.pattern() {
                    for step in pattern.flatten() {
                        if let MovementPattern::Twist { axis, layer, direction } = step {
                            match Twist::new(*axis, *layer, *direction) {
                                Ok(twist) => self.model.apply_twist(twist),
                                Err(e) => log::warn!("skipping gesture step: {}", e),
                            }
                        }
                    }
                }
            }
        }
    }
}
