use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::action::{Action, Role};
use crate::models::activity::ActivityKind;

/// Side-effect descriptor emitted alongside a successful transition. The core
/// never executes these; the calling layer applies them (toast, navigation,
/// notification hand-off).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    NotifyCounterpart { recipient: Role, message: String },
    CloseActivityView,
    OpenChat,
}

/// Broadcast to event-feed subscribers after each committed transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub activity_id: Uuid,
    pub kind: ActivityKind,
    pub status: String,
    pub action: Action,
    pub effects: Vec<Effect>,
    pub occurred_at: DateTime<Utc>,
}

/// One queued counterpart notification, consumed by the relay task. Actual
/// push delivery is out of scope; the relay logs the hand-off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub activity_id: Uuid,
    pub recipient: Role,
    pub message: String,
    pub queued_at: DateTime<Utc>,
}
