//! Busy-guarded sequencer for discrete animations.
//!
//! ```text
//!            submit                    complete / deadline
//!   Idle ───────────────▶ Animating ─────────────────────────▶ Idle
//!                           │   ▲                               │
//!                           │   └──── next queued request ◀─────┘
//!                           └─ urgent submit: Dropped
//!                              queued submit: pushed to FIFO
//! ```
//!
//! Time only moves when [`AnimationSequencer::advance`] is called, so the
//! machine is fully deterministic under test.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::oneshot;
use uuid::Uuid;

use crate::config::SequencerConfig;
use crate::utilities::math::sanitize_delta;

use super::request::{
    AnimationOutcome, AnimationRequest, AnimationTicket, DiscreteAction, SequencerEvent, Urgency,
};

#[derive(Debug)]
struct Pending {
    request: AnimationRequest,
    reply: oneshot::Sender<AnimationOutcome>,
}

impl Pending {
    fn resolve(self, outcome: AnimationOutcome) -> AnimationRequest {
        // the caller may have dropped its ticket
        let _ = self.reply.send(outcome);
        self.request
    }
}

#[derive(Debug)]
enum SequencerState {
    Idle,
    Animating { current: Pending, deadline: Duration },
}

#[derive(Debug)]
pub struct AnimationSequencer {
    config: SequencerConfig,
    clock: Duration,
    state: SequencerState,
    queue: VecDeque<Pending>,
    events: Vec<SequencerEvent>,
}

impl Default for AnimationSequencer {
    fn default() -> Self {
        Self::new(SequencerConfig::default())
    }
}

impl AnimationSequencer {
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            config,
            clock: Duration::ZERO,
            state: SequencerState::Idle,
            queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    pub fn timeout_for(&self, action: &DiscreteAction) -> Duration {
        let ms = match action {
            DiscreteAction::Twist(_) => self.config.twist_timeout_ms,
            DiscreteAction::Gesture { .. } => self.config.gesture_timeout_ms,
        };
        Duration::from_millis(ms)
    }

    /// Submit an action. The returned ticket resolves when it settles; a
    /// dropped request resolves before this returns.
    pub fn submit(&mut self, action: DiscreteAction, urgency: Urgency) -> AnimationTicket {
        let request = AnimationRequest::new(action, self.timeout_for(&action));
        let (reply, receiver) = oneshot::channel();
        let ticket = AnimationTicket::new(request.id, receiver);
        let pending = Pending { request, reply };

        match (&self.state, urgency) {
            (SequencerState::Idle, _) => self.start(pending),
            (SequencerState::Animating { .. }, Urgency::Urgent) => {
                log::debug!("dropping {}: sequencer busy", action.label());
                let request = pending.resolve(AnimationOutcome::Dropped);
                self.events.push(SequencerEvent::Settled {
                    request,
                    outcome: AnimationOutcome::Dropped,
                });
            }
            (SequencerState::Animating { .. }, Urgency::Queued) => {
                if matches!(action, DiscreteAction::Gesture { .. }) && !self.make_room_for_gesture() {
                    log::debug!("dropping {}: gesture queue disabled", action.label());
                    let request = pending.resolve(AnimationOutcome::Dropped);
                    self.events.push(SequencerEvent::Settled {
                        request,
                        outcome: AnimationOutcome::Dropped,
                    });
                } else {
                    log::debug!("queueing {} behind {} others", action.label(), self.queue.len());
                    self.queue.push_back(pending);
                }
            }
        }
        ticket
    }

    /// Drop the oldest waiting gestures until one more fits under
    /// `max_queued_gestures`. Queued twists are never displaced. Returns
    /// `false` when gestures may not queue at all.
    fn make_room_for_gesture(&mut self) -> bool {
        let limit = self.config.max_queued_gestures;
        if limit == 0 {
            return false;
        }
        let is_gesture = |p: &Pending| matches!(p.request.action, DiscreteAction::Gesture { .. });
        while self.queue.iter().filter(|&p| is_gesture(p)).count() >= limit {
            let Some(index) = self.queue.iter().position(|p| is_gesture(p)) else {
                break;
            };
            let Some(stale) = self.queue.remove(index) else {
                break;
            };
            let request = stale.resolve(AnimationOutcome::Dropped);
            log::debug!("displacing stale {} from the queue", request.action.label());
            self.events.push(SequencerEvent::Settled {
                request,
                outcome: AnimationOutcome::Dropped,
            });
        }
        true
    }

    fn start(&mut self, pending: Pending) {
        let deadline = self.clock.saturating_add(pending.request.timeout);
        log::debug!(
            "starting {} ({}), timeout {:?}",
            pending.request.action.label(),
            pending.request.id,
            pending.request.timeout
        );
        self.events.push(SequencerEvent::Started {
            request: pending.request,
        });
        self.state = SequencerState::Animating {
            current: pending,
            deadline,
        };
    }

    /// Settle whatever is in flight and start the next queued request.
    fn settle(&mut self, outcome: AnimationOutcome) {
        let previous = std::mem::replace(&mut self.state, SequencerState::Idle);
        if let SequencerState::Animating { current, .. } = previous {
            let request = current.resolve(outcome);
            log::debug!("settled {} as {:?}", request.action.label(), outcome);
            self.events.push(SequencerEvent::Settled { request, outcome });
        }
        if let Some(next) = self.queue.pop_front() {
            self.start(next);
        }
    }

    /// Report that the renderer finished the request `id`. Returns `false`
    /// for stale or unknown ids.
    pub fn complete(&mut self, id: Uuid) -> bool {
        let in_flight = self.in_flight().is_some_and(|r| r.id == id);
        if in_flight {
            self.settle(AnimationOutcome::Completed);
        }
        in_flight
    }

    /// Move the sequencer clock forward by `delta_time` seconds and settle
    /// an in-flight request whose deadline has passed.
    ///
    /// At most one request settles per call. The next queued request starts
    /// with its deadline measured from the advanced clock, so one long frame
    /// never times out a whole chain.
    pub fn advance(&mut self, delta_time: f64) {
        let dt = sanitize_delta(delta_time);
        let step = Duration::try_from_secs_f64(dt).unwrap_or(Duration::MAX);
        self.clock = self.clock.saturating_add(step);

        let overdue = match &self.state {
            SequencerState::Animating { current, deadline } if self.clock >= *deadline => {
                Some(current.request)
            }
            _ => None,
        };
        if let Some(request) = overdue {
            log::warn!(
                "{} did not report completion within {:?}; forcing settle",
                request.action.label(),
                request.timeout
            );
            self.settle(AnimationOutcome::TimedOut);
        }
    }

    /// Drain lifecycle events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<SequencerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, SequencerState::Animating { .. })
    }

    pub fn in_flight(&self) -> Option<&AnimationRequest> {
        match &self.state {
            SequencerState::Animating { current, .. } => Some(&current.request),
            SequencerState::Idle => None,
        }
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Cancel the in-flight request and everything queued behind it.
    pub fn reset(&mut self) {
        let cancelled = self.queue.len() + usize::from(self.is_busy());
        if cancelled > 0 {
            log::debug!("cancelling {} pending animations", cancelled);
        }
        if let SequencerState::Animating { current, .. } = std::mem::replace(&mut self.state, SequencerState::Idle) {
            let request = current.resolve(AnimationOutcome::Cancelled);
            self.events.push(SequencerEvent::Settled {
                request,
                outcome: AnimationOutcome::Cancelled,
            });
        }
        for pending in self.queue.drain(..) {
            let request = pending.resolve(AnimationOutcome::Cancelled);
            self.events.push(SequencerEvent::Settled {
                request,
                outcome: AnimationOutcome::Cancelled,
            });
        }
    }
}
