//! Counterpart notification relay. `NotifyCounterpart` effects become queued
//! `Notification` values; the relay drains the queue and logs the hand-off.
//! Actual push delivery belongs to an external dispatcher.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::effect::Notification;
use crate::state::AppState;

pub async fn enqueue_notification(
    state: &AppState,
    notification: Notification,
) -> Result<(), AppError> {
    state
        .notify_tx
        .send(notification)
        .await
        .map_err(|err| AppError::Internal(format!("notification queue send failed: {err}")))?;

    state.metrics.notifications_in_queue.inc();
    Ok(())
}

pub async fn run_notification_relay(
    state: Arc<AppState>,
    mut notify_rx: mpsc::Receiver<Notification>,
) {
    info!("notification relay started");

    while let Some(notification) = notify_rx.recv().await {
        state.metrics.notifications_in_queue.dec();
        state
            .metrics
            .notifications_total
            .with_label_values(&[notification.recipient.as_str()])
            .inc();

        info!(
            activity_id = %notification.activity_id,
            recipient = %notification.recipient,
            message = %notification.message,
            "notification handed off"
        );
    }

    warn!("notification relay stopped: queue channel closed");
}
