//! Transition engine: validates one requested action against the capability
//! map and the per-kind edge tables, and produces the updated activity.
//!
//! `apply` is a pure function of (activity, role, action, reason). It does no
//! I/O and mutates nothing; on rejection the input is untouched, so retrying
//! the same illegal action yields the same error.

use chrono::Utc;

use crate::engine::{capability, LifecycleError};
use crate::models::action::{Action, Role};
use crate::models::activity::{Activity, ActivityDetails};
use crate::models::status::{DeliveryStatus, OrderStatus, PresenceStatus, RideStatus};

pub fn apply(
    activity: &ActivityDetails,
    role: Role,
    action: Action,
    reason: Option<&str>,
) -> Result<ActivityDetails, LifecycleError> {
    if activity.is_terminal() {
        return Err(LifecycleError::AlreadyTerminal {
            status: activity.status_str(),
        });
    }

    if !capability::is_allowed(role, &activity.activity, action) {
        return Err(LifecycleError::Unauthorized {
            role,
            action,
            status: activity.status_str(),
        });
    }

    // Contact opens a channel to the counterpart; the activity itself does
    // not move.
    if action == Action::Contact {
        return Ok(activity.clone());
    }

    let mut updated = activity.clone();
    let rejection = LifecycleError::InvalidTransition {
        action,
        status: activity.status_str(),
    };

    match &mut updated.activity {
        Activity::Ride { status, .. } => {
            *status = ride_target(*status, action).ok_or(rejection)?;
        }
        Activity::Delivery { status, .. } => {
            *status = delivery_target(*status, action).ok_or(rejection)?;
        }
        Activity::ProductOrder { status, .. } => {
            *status = order_target(*status, action).ok_or(rejection)?;
        }
        Activity::DriverStatus { status, .. } => {
            *status = presence_target(*status, action).ok_or(rejection)?;
        }
    }

    if action == Action::Cancel {
        if let Some(reason) = reason {
            updated.cancel_reason = Some(reason.to_string());
        }
    }
    updated.updated_at = Utc::now();

    Ok(updated)
}

fn ride_target(status: RideStatus, action: Action) -> Option<RideStatus> {
    match (status, action) {
        (RideStatus::Requested, Action::Accept) => Some(RideStatus::Accepted),
        (RideStatus::Requested, Action::Reject) => Some(RideStatus::Rejected),
        (RideStatus::Accepted, Action::EnRoute) => Some(RideStatus::EnRouteToPickup),
        (RideStatus::EnRouteToPickup, Action::Arrive) => Some(RideStatus::ArrivedAtPickup),
        (RideStatus::ArrivedAtPickup, Action::Start) => Some(RideStatus::RideInProgress),
        (RideStatus::RideInProgress, Action::End) => Some(RideStatus::RideCompleted),
        (status, Action::Cancel) if !status.is_terminal() => Some(RideStatus::RideCancelled),
        _ => None,
    }
}

fn delivery_target(status: DeliveryStatus, action: Action) -> Option<DeliveryStatus> {
    match (status, action) {
        (DeliveryStatus::Requested, Action::Accept) => {
            Some(DeliveryStatus::AcceptedEnRoutePickup)
        }
        (DeliveryStatus::Requested, Action::Reject) => Some(DeliveryStatus::Rejected),
        (DeliveryStatus::AcceptedEnRoutePickup, Action::ArrivePickup) => {
            Some(DeliveryStatus::ArrivedAtPickup)
        }
        (DeliveryStatus::ArrivedAtPickup, Action::ItemPickedUp) => {
            Some(DeliveryStatus::PickedUpEnRouteDropoff)
        }
        (DeliveryStatus::PickedUpEnRouteDropoff, Action::ArriveDropoff) => {
            Some(DeliveryStatus::ArrivedAtDropoff)
        }
        // The drop-off ping is optional; a driver may close out directly.
        (
            DeliveryStatus::PickedUpEnRouteDropoff | DeliveryStatus::ArrivedAtDropoff,
            Action::Complete,
        ) => Some(DeliveryStatus::Completed),
        (status, Action::Cancel) if !status.is_terminal() => Some(DeliveryStatus::Cancelled),
        _ => None,
    }
}

fn order_target(status: OrderStatus, action: Action) -> Option<OrderStatus> {
    match (status, action) {
        (OrderStatus::New, Action::Accept) => Some(OrderStatus::Accepted),
        (OrderStatus::New, Action::Reject) => Some(OrderStatus::Rejected),
        (OrderStatus::Accepted, Action::Complete) => Some(OrderStatus::Completed),
        (status, Action::Cancel) if !status.is_terminal() => Some(OrderStatus::Cancelled),
        _ => None,
    }
}

fn presence_target(status: PresenceStatus, action: Action) -> Option<PresenceStatus> {
    match (status, action) {
        (PresenceStatus::Offline, Action::GoOnline) => Some(PresenceStatus::Online),
        (PresenceStatus::Online, Action::GoOffline) => Some(PresenceStatus::Offline),
        _ => None,
    }
}
