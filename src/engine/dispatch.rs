//! Activity dispatcher: the one call surface the rest of the application
//! uses. Delegates validation to the transition engine and derives the
//! side-effect descriptors the caller must apply (notify, navigate, close).

use crate::engine::{transition, LifecycleError};
use crate::models::action::{Action, Role};
use crate::models::activity::{Activity, ActivityDetails, ActivityKind};
use crate::models::effect::Effect;
use crate::models::status::{DeliveryStatus, RideStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub activity: ActivityDetails,
    pub effects: Vec<Effect>,
}

pub fn invoke(
    activity: &ActivityDetails,
    role: Role,
    action: Action,
    reason: Option<&str>,
) -> Result<Invocation, LifecycleError> {
    let updated = transition::apply(activity, role, action, reason)?;
    let effects = derive_effects(&updated, role, action);

    Ok(Invocation {
        activity: updated,
        effects,
    })
}

fn derive_effects(updated: &ActivityDetails, role: Role, action: Action) -> Vec<Effect> {
    if action == Action::Contact {
        return vec![Effect::OpenChat];
    }

    let mut effects = Vec::new();

    if let Some(recipient) = counterpart(role, updated.kind()) {
        effects.push(Effect::NotifyCounterpart {
            recipient,
            message: notify_message(role, action, updated),
        });
    }

    // A counterpart becomes contactable the moment the request is accepted.
    let chat_opens = matches!(
        updated.activity,
        Activity::Ride {
            status: RideStatus::Accepted,
            ..
        } | Activity::Delivery {
            status: DeliveryStatus::AcceptedEnRoutePickup,
            ..
        }
    );
    if chat_opens {
        effects.push(Effect::OpenChat);
    }

    if updated.is_terminal() {
        effects.push(Effect::CloseActivityView);
    }

    effects
}

fn counterpart(role: Role, kind: ActivityKind) -> Option<Role> {
    match (role, kind) {
        (_, ActivityKind::DriverStatus) => None,
        (Role::Rider, ActivityKind::ProductOrder) => Some(Role::BusinessOwner),
        (Role::Rider, _) => Some(Role::Driver),
        (Role::Driver | Role::BusinessOwner, _) => Some(Role::Rider),
    }
}

fn notify_message(role: Role, action: Action, updated: &ActivityDetails) -> String {
    match &updated.activity {
        Activity::Ride { .. } => match action {
            Action::Accept => "Your ride request was accepted".to_string(),
            Action::Reject => "Your ride request was declined".to_string(),
            Action::EnRoute => "Your driver is on the way".to_string(),
            Action::Arrive => "Your driver has arrived at the pickup point".to_string(),
            Action::Start => "Your ride has started".to_string(),
            Action::End => "Your ride is complete".to_string(),
            Action::Cancel if role == Role::Rider => "The rider cancelled the ride".to_string(),
            Action::Cancel => "Your ride was cancelled by the driver".to_string(),
            other => format!("Ride update: {other}"),
        },
        Activity::Delivery { .. } => match action {
            Action::Accept => "Your delivery request was accepted".to_string(),
            Action::Reject => "Your delivery request was declined".to_string(),
            Action::ArrivePickup => "Your driver has arrived at the pickup location".to_string(),
            Action::ItemPickedUp => "Your item was picked up and is on the way".to_string(),
            Action::ArriveDropoff => {
                "Your driver has arrived at the drop-off location".to_string()
            }
            Action::Complete => "Your delivery is complete".to_string(),
            Action::Cancel if role == Role::Rider => {
                "The sender cancelled the delivery".to_string()
            }
            Action::Cancel => "Your delivery was cancelled by the driver".to_string(),
            other => format!("Delivery update: {other}"),
        },
        Activity::ProductOrder { details, .. } => match action {
            Action::Accept => format!("{} accepted your order", details.business_name),
            Action::Reject => format!("{} declined your order", details.business_name),
            Action::Complete => format!("Your order from {} is ready", details.business_name),
            Action::Cancel if role == Role::Rider => {
                "The customer cancelled the order".to_string()
            }
            Action::Cancel => format!("{} cancelled your order", details.business_name),
            other => format!("Order update: {other}"),
        },
        Activity::DriverStatus { .. } => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::invoke;
    use crate::engine::LifecycleError;
    use crate::models::action::{Action, Role};
    use crate::models::activity::{
        Activity, ActivityDetails, DeliveryDetails, DriverProfile, OrderDetails, Participants,
        RideDetails,
    };
    use crate::models::effect::Effect;
    use crate::models::status::{DeliveryStatus, OrderStatus, PresenceStatus, RideStatus};

    fn wrap(activity: Activity) -> ActivityDetails {
        ActivityDetails {
            id: Uuid::from_u128(42),
            participants: Participants {
                rider: Some(Uuid::from_u128(1)),
                driver: Some(Uuid::from_u128(2)),
                business_owner: Some(Uuid::from_u128(3)),
            },
            activity,
            cancel_reason: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn ride(status: RideStatus) -> ActivityDetails {
        wrap(Activity::Ride {
            status,
            details: RideDetails {
                pickup: "Central Station".to_string(),
                dropoff: "Airport".to_string(),
                driver_name: Some("Dana".to_string()),
                vehicle_info: Some("Blue sedan".to_string()),
                fare: 18.50,
                distance: 12.3,
                vehicle_type: "sedan".to_string(),
            },
        })
    }

    fn delivery(status: DeliveryStatus) -> ActivityDetails {
        wrap(Activity::Delivery {
            status,
            details: DeliveryDetails {
                pickup: "Warehouse 4".to_string(),
                dropoff: "Elm Street 12".to_string(),
                item_name: "Envelope".to_string(),
                item_description: None,
                estimated_payment: 7.0,
                recipient_name: "Sam".to_string(),
                recipient_phone: "+49150000000".to_string(),
            },
        })
    }

    fn order(status: OrderStatus) -> ActivityDetails {
        wrap(Activity::ProductOrder {
            status,
            details: OrderDetails {
                order_id: "ORD-1001".to_string(),
                business_name: "Corner Bakery".to_string(),
                product_name: "Sourdough".to_string(),
                quantity: 2,
                total_amount: 9.80,
                customer_name: "Kim".to_string(),
                customer_address: "Oak Lane 3".to_string(),
            },
        })
    }

    fn presence(status: PresenceStatus) -> ActivityDetails {
        wrap(Activity::DriverStatus {
            status,
            details: DriverProfile {
                vehicle_type: "bike".to_string(),
                license_plate: "B-XY 123".to_string(),
            },
        })
    }

    fn has_open_chat(effects: &[Effect]) -> bool {
        effects.contains(&Effect::OpenChat)
    }

    fn has_close_view(effects: &[Effect]) -> bool {
        effects.contains(&Effect::CloseActivityView)
    }

    #[test]
    fn driver_accepting_a_ride_opens_chat_and_notifies_the_rider() {
        let invocation = invoke(&ride(RideStatus::Requested), Role::Driver, Action::Accept, None)
            .expect("driver accept must succeed");

        assert_eq!(invocation.activity.status_str(), "accepted");
        assert!(has_open_chat(&invocation.effects));
        assert!(!has_close_view(&invocation.effects));
        assert!(invocation.effects.iter().any(|effect| matches!(
            effect,
            Effect::NotifyCounterpart {
                recipient: Role::Rider,
                ..
            }
        )));
    }

    #[test]
    fn rider_cannot_accept_their_own_ride() {
        let result = invoke(&ride(RideStatus::Accepted), Role::Rider, Action::Accept, None);

        assert_eq!(
            result,
            Err(LifecycleError::Unauthorized {
                role: Role::Rider,
                action: Action::Accept,
                status: "accepted",
            })
        );
    }

    #[test]
    fn completing_a_delivery_closes_the_view() {
        let invocation = invoke(
            &delivery(DeliveryStatus::PickedUpEnRouteDropoff),
            Role::Driver,
            Action::Complete,
            None,
        )
        .expect("driver complete must succeed");

        assert_eq!(invocation.activity.status_str(), "delivery_completed");
        assert!(has_close_view(&invocation.effects));
        assert!(!has_open_chat(&invocation.effects));
    }

    #[test]
    fn rejected_order_is_terminal_for_any_follow_up() {
        let rejected = invoke(
            &order(OrderStatus::New),
            Role::BusinessOwner,
            Action::Reject,
            None,
        )
        .expect("business reject must succeed");
        assert_eq!(rejected.activity.status_str(), "product_order_rejected");
        assert!(has_close_view(&rejected.effects));

        let follow_up = invoke(
            &rejected.activity,
            Role::BusinessOwner,
            Action::Complete,
            None,
        );
        assert_eq!(
            follow_up,
            Err(LifecycleError::AlreadyTerminal {
                status: "product_order_rejected"
            })
        );
    }

    #[test]
    fn going_online_twice_is_an_invalid_transition() {
        let online = invoke(
            &presence(PresenceStatus::Offline),
            Role::Driver,
            Action::GoOnline,
            None,
        )
        .expect("go_online must succeed from offline");
        assert_eq!(online.activity.status_str(), "online");

        let again = invoke(&online.activity, Role::Driver, Action::GoOnline, None);
        assert_eq!(
            again,
            Err(LifecycleError::InvalidTransition {
                action: Action::GoOnline,
                status: "online",
            })
        );
    }

    #[test]
    fn presence_toggle_emits_no_effects() {
        let invocation = invoke(
            &presence(PresenceStatus::Online),
            Role::Driver,
            Action::GoOffline,
            None,
        )
        .expect("go_offline must succeed from online");

        assert!(invocation.effects.is_empty());
    }

    #[test]
    fn contact_emits_open_chat_only() {
        let accepted = ride(RideStatus::Accepted);
        let invocation = invoke(&accepted, Role::Rider, Action::Contact, None)
            .expect("contact must succeed once accepted");

        assert_eq!(invocation.activity, accepted);
        assert_eq!(invocation.effects, vec![Effect::OpenChat]);
    }

    #[test]
    fn cancellation_notifies_the_counterpart_and_closes_the_view() {
        let invocation = invoke(
            &ride(RideStatus::EnRouteToPickup),
            Role::Rider,
            Action::Cancel,
            Some("plans changed"),
        )
        .expect("rider cancel must succeed");

        assert_eq!(invocation.activity.status_str(), "ride_cancelled");
        assert_eq!(
            invocation.activity.cancel_reason.as_deref(),
            Some("plans changed")
        );
        assert!(has_close_view(&invocation.effects));
        assert!(invocation.effects.iter().any(|effect| matches!(
            effect,
            Effect::NotifyCounterpart {
                recipient: Role::Driver,
                ..
            }
        )));
    }
}
