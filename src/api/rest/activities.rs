use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::engine::dispatch;
use crate::error::AppError;
use crate::models::action::{Action, Role};
use crate::models::activity::{
    Activity, ActivityDetails, DeliveryDetails, DriverProfile, OrderDetails, Participants,
    RideDetails,
};
use crate::models::effect::{Effect, Notification, TransitionEvent};
use crate::models::status::{DeliveryStatus, OrderStatus, PresenceStatus, RideStatus};
use crate::notify::enqueue_notification;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", post(create_activity).get(list_activities))
        .route(
            "/activities/:id",
            get(get_activity).delete(discard_activity),
        )
        .route("/activities/:id/actions", post(invoke_action))
}

/// Payload of the external request-submission flow. The initial status is
/// always the kind's own; clients cannot pick one.
#[derive(Deserialize)]
pub struct CreateActivityRequest {
    #[serde(default)]
    pub participants: Participants,
    #[serde(flatten)]
    pub activity: NewActivity,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NewActivity {
    Ride(RideDetails),
    Delivery(DeliveryDetails),
    ProductOrder(OrderDetails),
    DriverStatus(DriverProfile),
}

#[derive(Deserialize)]
pub struct InvokeActionRequest {
    pub role: Role,
    pub action: Action,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Serialize)]
pub struct InvokeActionResponse {
    pub activity: ActivityDetails,
    pub effects: Vec<Effect>,
}

async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateActivityRequest>,
) -> Result<Json<ActivityDetails>, AppError> {
    let CreateActivityRequest {
        participants,
        activity,
    } = payload;

    let activity = match activity {
        NewActivity::Ride(details) => {
            if details.pickup.trim().is_empty() || details.dropoff.trim().is_empty() {
                return Err(AppError::BadRequest(
                    "pickup and dropoff cannot be empty".to_string(),
                ));
            }
            if participants.rider.is_none() {
                return Err(AppError::BadRequest(
                    "a ride requires a rider participant".to_string(),
                ));
            }
            Activity::Ride {
                status: RideStatus::INITIAL,
                details,
            }
        }
        NewActivity::Delivery(details) => {
            if details.item_name.trim().is_empty() {
                return Err(AppError::BadRequest("item_name cannot be empty".to_string()));
            }
            if participants.rider.is_none() {
                return Err(AppError::BadRequest(
                    "a delivery requires a rider participant".to_string(),
                ));
            }
            Activity::Delivery {
                status: DeliveryStatus::INITIAL,
                details,
            }
        }
        NewActivity::ProductOrder(details) => {
            if details.quantity == 0 {
                return Err(AppError::BadRequest("quantity must be > 0".to_string()));
            }
            if participants.business_owner.is_none() {
                return Err(AppError::BadRequest(
                    "a product order requires a business_owner participant".to_string(),
                ));
            }
            Activity::ProductOrder {
                status: OrderStatus::INITIAL,
                details,
            }
        }
        NewActivity::DriverStatus(details) => {
            if participants.driver.is_none() {
                return Err(AppError::BadRequest(
                    "driver status requires a driver participant".to_string(),
                ));
            }
            Activity::DriverStatus {
                status: PresenceStatus::INITIAL,
                details,
            }
        }
    };

    let now = Utc::now();
    let details = ActivityDetails {
        id: Uuid::new_v4(),
        participants,
        activity,
        cancel_reason: None,
        created_at: now,
        updated_at: now,
    };

    state.activities.insert(details.id, details.clone());
    state.metrics.active_activities.inc();

    info!(
        activity_id = %details.id,
        kind = %details.kind(),
        status = details.status_str(),
        "activity created"
    );

    Ok(Json(details))
}

async fn list_activities(State(state): State<Arc<AppState>>) -> Json<Vec<ActivityDetails>> {
    let activities = state
        .activities
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    Json(activities)
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ActivityDetails>, AppError> {
    let activity = state
        .activities
        .get(&id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| AppError::NotFound(format!("activity {id} not found")))?;

    Ok(Json(activity))
}

async fn invoke_action(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<InvokeActionRequest>,
) -> Result<Json<InvokeActionResponse>, AppError> {
    let current = state
        .activities
        .get(&id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| AppError::NotFound(format!("activity {id} not found")))?;

    let start = Instant::now();
    let result = dispatch::invoke(
        &current,
        payload.role,
        payload.action,
        payload.reason.as_deref(),
    );
    let elapsed = start.elapsed().as_secs_f64();

    let outcome = match &result {
        Ok(_) => "success",
        Err(err) => err.kind(),
    };
    state
        .metrics
        .transition_latency_seconds
        .with_label_values(&[outcome])
        .observe(elapsed);
    state
        .metrics
        .transitions_total
        .with_label_values(&[current.kind().as_str(), outcome])
        .inc();

    let invocation = result?;

    // Contact does not move the activity; nothing to persist or announce.
    if payload.action != Action::Contact {
        state.activities.insert(id, invocation.activity.clone());
        if invocation.activity.is_terminal() {
            state.metrics.active_activities.dec();
        }

        for effect in &invocation.effects {
            if let Effect::NotifyCounterpart { recipient, message } = effect {
                enqueue_notification(
                    &state,
                    Notification {
                        activity_id: id,
                        recipient: *recipient,
                        message: message.clone(),
                        queued_at: Utc::now(),
                    },
                )
                .await?;
            }
        }

        let _ = state.transition_events_tx.send(TransitionEvent {
            activity_id: id,
            kind: invocation.activity.kind(),
            status: invocation.activity.status_str().to_string(),
            action: payload.action,
            effects: invocation.effects.clone(),
            occurred_at: Utc::now(),
        });

        info!(
            activity_id = %id,
            kind = %invocation.activity.kind(),
            status = invocation.activity.status_str(),
            action = %payload.action,
            "transition committed"
        );
    }

    Ok(Json(InvokeActionResponse {
        activity: invocation.activity,
        effects: invocation.effects,
    }))
}

async fn discard_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let is_terminal = state
        .activities
        .get(&id)
        .map(|entry| entry.value().is_terminal())
        .ok_or_else(|| AppError::NotFound(format!("activity {id} not found")))?;

    if !is_terminal {
        return Err(AppError::Conflict(format!(
            "activity {id} is still in flight"
        )));
    }

    state.activities.remove(&id);
    info!(activity_id = %id, "activity discarded");

    Ok(StatusCode::NO_CONTENT)
}
