//! Role capability map: which actions a role may invoke at a given
//! (kind, status). Pure lookup, no I/O.
//!
//! Cancellation is deliberately broad: once a two-party activity is under
//! way, either side may cancel from any non-terminal status so that neither
//! party is deadlocked by an unreachable counterpart. Before acceptance the
//! counterpart declines with `reject` instead.

use crate::models::action::{Action, Role};
use crate::models::activity::Activity;
use crate::models::status::{DeliveryStatus, OrderStatus, RideStatus};

pub fn allowed_actions(role: Role, activity: &Activity) -> &'static [Action] {
    match activity {
        Activity::Ride { status, .. } => ride_actions(role, *status),
        Activity::Delivery { status, .. } => delivery_actions(role, *status),
        Activity::ProductOrder { status, .. } => order_actions(role, *status),
        Activity::DriverStatus { .. } => presence_actions(role),
    }
}

pub fn is_allowed(role: Role, activity: &Activity, action: Action) -> bool {
    allowed_actions(role, activity).contains(&action)
}

fn ride_actions(role: Role, status: RideStatus) -> &'static [Action] {
    match (role, status) {
        (Role::Rider, RideStatus::Requested) => &[Action::Cancel],
        (
            Role::Rider,
            RideStatus::Accepted
            | RideStatus::EnRouteToPickup
            | RideStatus::ArrivedAtPickup
            | RideStatus::RideInProgress,
        ) => &[Action::Cancel, Action::Contact],
        (Role::Driver, RideStatus::Requested) => &[Action::Accept, Action::Reject],
        (Role::Driver, RideStatus::Accepted) => &[Action::EnRoute, Action::Cancel],
        (Role::Driver, RideStatus::EnRouteToPickup) => &[Action::Arrive, Action::Cancel],
        (Role::Driver, RideStatus::ArrivedAtPickup) => &[Action::Start, Action::Cancel],
        (Role::Driver, RideStatus::RideInProgress) => &[Action::End, Action::Cancel],
        _ => &[],
    }
}

fn delivery_actions(role: Role, status: DeliveryStatus) -> &'static [Action] {
    match (role, status) {
        (Role::Rider, DeliveryStatus::Requested) => &[Action::Cancel],
        (
            Role::Rider,
            DeliveryStatus::AcceptedEnRoutePickup
            | DeliveryStatus::ArrivedAtPickup
            | DeliveryStatus::PickedUpEnRouteDropoff
            | DeliveryStatus::ArrivedAtDropoff,
        ) => &[Action::Cancel, Action::Contact],
        (Role::Driver, DeliveryStatus::Requested) => &[Action::Accept, Action::Reject],
        (Role::Driver, DeliveryStatus::AcceptedEnRoutePickup) => {
            &[Action::ArrivePickup, Action::Cancel]
        }
        (Role::Driver, DeliveryStatus::ArrivedAtPickup) => {
            &[Action::ItemPickedUp, Action::Cancel]
        }
        (Role::Driver, DeliveryStatus::PickedUpEnRouteDropoff) => {
            &[Action::ArriveDropoff, Action::Complete, Action::Cancel]
        }
        (Role::Driver, DeliveryStatus::ArrivedAtDropoff) => {
            &[Action::Complete, Action::Cancel]
        }
        _ => &[],
    }
}

fn order_actions(role: Role, status: OrderStatus) -> &'static [Action] {
    match (role, status) {
        (Role::Rider, OrderStatus::New | OrderStatus::Accepted) => &[Action::Cancel],
        (Role::BusinessOwner, OrderStatus::New) => &[Action::Accept, Action::Reject],
        (Role::BusinessOwner, OrderStatus::Accepted) => &[Action::Complete, Action::Cancel],
        _ => &[],
    }
}

// The presence toggle is symmetric and always legal for the owning driver;
// the no-op direction is caught by the edge table, not by authorization.
fn presence_actions(role: Role) -> &'static [Action] {
    match role {
        Role::Driver => &[Action::GoOnline, Action::GoOffline],
        _ => &[],
    }
}
