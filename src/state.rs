use dashmap::DashMap;
use tokio::sync::{broadcast, mpsc};
use uuid::Uuid;

use crate::models::activity::ActivityDetails;
use crate::models::effect::{Notification, TransitionEvent};
use crate::observability::metrics::Metrics;

/// Server-side store and channels. The lifecycle core itself is stateless;
/// everything mutable lives here, owned by the HTTP layer.
pub struct AppState {
    pub activities: DashMap<Uuid, ActivityDetails>,
    pub notify_tx: mpsc::Sender<Notification>,
    pub transition_events_tx: broadcast::Sender<TransitionEvent>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(
        notify_queue_size: usize,
        event_buffer_size: usize,
    ) -> (Self, mpsc::Receiver<Notification>) {
        let (notify_tx, notify_rx) = mpsc::channel(notify_queue_size);
        let (transition_events_tx, _unused_rx) = broadcast::channel(event_buffer_size);

        (
            Self {
                activities: DashMap::new(),
                notify_tx,
                transition_events_tx,
                metrics: Metrics::new(),
            },
            notify_rx,
        )
    }
}
