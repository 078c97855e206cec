use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::status::{DeliveryStatus, OrderStatus, PresenceStatus, RideStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Ride,
    Delivery,
    ProductOrder,
    DriverStatus,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ride => "ride",
            Self::Delivery => "delivery",
            Self::ProductOrder => "product_order",
            Self::DriverStatus => "driver_status",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Foreign identifiers of the parties involved in an activity. Full profiles
/// live with the identity provider; the core never embeds them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participants {
    #[serde(default)]
    pub rider: Option<Uuid>,
    #[serde(default)]
    pub driver: Option<Uuid>,
    #[serde(default)]
    pub business_owner: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideDetails {
    pub pickup: String,
    pub dropoff: String,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub vehicle_info: Option<String>,
    pub fare: f64,
    pub distance: f64,
    pub vehicle_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDetails {
    pub pickup: String,
    pub dropoff: String,
    pub item_name: String,
    #[serde(default)]
    pub item_description: Option<String>,
    pub estimated_payment: f64,
    pub recipient_name: String,
    pub recipient_phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub order_id: String,
    pub business_name: String,
    pub product_name: String,
    pub quantity: u32,
    pub total_amount: f64,
    pub customer_name: String,
    pub customer_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub vehicle_type: String,
    pub license_plate: String,
}

/// Kind-specific state of one activity. The status field of each variant is
/// drawn from that kind's closed vocabulary, so an out-of-vocabulary status
/// is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    Ride {
        status: RideStatus,
        #[serde(flatten)]
        details: RideDetails,
    },
    Delivery {
        status: DeliveryStatus,
        #[serde(flatten)]
        details: DeliveryDetails,
    },
    ProductOrder {
        status: OrderStatus,
        #[serde(flatten)]
        details: OrderDetails,
    },
    DriverStatus {
        status: PresenceStatus,
        #[serde(flatten)]
        details: DriverProfile,
    },
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::Ride { .. } => ActivityKind::Ride,
            Self::Delivery { .. } => ActivityKind::Delivery,
            Self::ProductOrder { .. } => ActivityKind::ProductOrder,
            Self::DriverStatus { .. } => ActivityKind::DriverStatus,
        }
    }

    pub fn status_str(&self) -> &'static str {
        match self {
            Self::Ride { status, .. } => status.as_str(),
            Self::Delivery { status, .. } => status.as_str(),
            Self::ProductOrder { status, .. } => status.as_str(),
            Self::DriverStatus { status, .. } => status.as_str(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Ride { status, .. } => status.is_terminal(),
            Self::Delivery { status, .. } => status.is_terminal(),
            Self::ProductOrder { status, .. } => status.is_terminal(),
            Self::DriverStatus { .. } => false,
        }
    }
}

/// The single in-flight record a UI surface is showing. Owned by the caller,
/// mutated only through the dispatcher; past activities are an external
/// store's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub id: Uuid,
    pub participants: Participants,
    #[serde(flatten)]
    pub activity: Activity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ActivityDetails {
    pub fn kind(&self) -> ActivityKind {
        self.activity.kind()
    }

    pub fn status_str(&self) -> &'static str {
        self.activity.status_str()
    }

    pub fn is_terminal(&self) -> bool {
        self.activity.is_terminal()
    }
}
