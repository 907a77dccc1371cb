//! Discrete animation requests and their completion signals.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::cube::Twist;
use crate::gesture::GestureEmotion;

/// Something that plays as one uninterruptible animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscreteAction {
    Twist(Twist),
    Gesture { emotion: GestureEmotion },
}

impl DiscreteAction {
    pub fn label(&self) -> String {
        match self {
            DiscreteAction::Twist(t) => format!("twist {:?} layer {} dir {}", t.axis, t.layer, t.direction),
            DiscreteAction::Gesture { emotion } => format!("gesture {:?}", emotion),
        }
    }
}

/// How a request behaves when the sequencer is busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Dropped if something is already animating.
    Urgent,
    /// Appended to the FIFO queue if something is already animating.
    Queued,
}

/// How a request finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationOutcome {
    /// The renderer reported completion.
    Completed,
    /// Force-settled after the hard timeout. The caller is released as on
    /// success, but the action's effect is never applied.
    TimedOut,
    /// Rejected because the sequencer was busy; nothing happened.
    Dropped,
    /// Discarded by a reset before it finished.
    Cancelled,
}

impl AnimationOutcome {
    /// Whether the action took effect. Only a renderer-confirmed finish counts.
    pub fn is_applied(&self) -> bool {
        matches!(self, AnimationOutcome::Completed)
    }

    /// Whether the caller should carry on as if the animation played.
    pub fn is_success(&self) -> bool {
        matches!(self, AnimationOutcome::Completed | AnimationOutcome::TimedOut)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationRequest {
    pub id: Uuid,
    pub action: DiscreteAction,
    #[serde(with = "duration_ms")]
    pub timeout: Duration,
}

impl AnimationRequest {
    pub fn new(action: DiscreteAction, timeout: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            action,
            timeout,
        }
    }
}

/// Caller-side handle for one request.
#[derive(Debug)]
pub struct AnimationTicket {
    pub id: Uuid,
    receiver: oneshot::Receiver<AnimationOutcome>,
}

impl AnimationTicket {
    pub(crate) fn new(id: Uuid, receiver: oneshot::Receiver<AnimationOutcome>) -> Self {
        Self { id, receiver }
    }

    /// Wait until the request settles. A sequencer dropped mid-flight
    /// reports [`AnimationOutcome::Cancelled`].
    pub async fn outcome(self) -> AnimationOutcome {
        self.receiver.await.unwrap_or(AnimationOutcome::Cancelled)
    }

    /// Non-blocking check; `None` while still pending.
    pub fn try_outcome(&mut self) -> Option<AnimationOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(AnimationOutcome::Cancelled),
        }
    }
}

/// Lifecycle notifications drained by the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SequencerEvent {
    Started { request: AnimationRequest },
    Settled { request: AnimationRequest, outcome: AnimationOutcome },
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}
