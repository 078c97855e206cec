use serde::{Deserialize, Serialize};

/// Position of a ride within its lifecycle graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Requested,
    Accepted,
    EnRouteToPickup,
    ArrivedAtPickup,
    RideInProgress,
    RideCompleted,
    RideCancelled,
    Rejected,
}

impl RideStatus {
    pub const INITIAL: Self = Self::Requested;

    pub const ALL: [Self; 8] = [
        Self::Requested,
        Self::Accepted,
        Self::EnRouteToPickup,
        Self::ArrivedAtPickup,
        Self::RideInProgress,
        Self::RideCompleted,
        Self::RideCancelled,
        Self::Rejected,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::RideCompleted | Self::RideCancelled | Self::Rejected
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Accepted => "accepted",
            Self::EnRouteToPickup => "en_route_to_pickup",
            Self::ArrivedAtPickup => "arrived_at_pickup",
            Self::RideInProgress => "ride_in_progress",
            Self::RideCompleted => "ride_completed",
            Self::RideCancelled => "ride_cancelled",
            Self::Rejected => "rejected",
        }
    }
}

/// Position of a delivery task within its lifecycle graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "delivery_requested")]
    Requested,
    #[serde(rename = "delivery_accepted_en_route_pickup")]
    AcceptedEnRoutePickup,
    #[serde(rename = "delivery_arrived_at_pickup")]
    ArrivedAtPickup,
    #[serde(rename = "delivery_picked_up_en_route_dropoff")]
    PickedUpEnRouteDropoff,
    #[serde(rename = "delivery_arrived_at_dropoff")]
    ArrivedAtDropoff,
    #[serde(rename = "delivery_completed")]
    Completed,
    #[serde(rename = "delivery_cancelled")]
    Cancelled,
    #[serde(rename = "delivery_rejected")]
    Rejected,
}

impl DeliveryStatus {
    pub const INITIAL: Self = Self::Requested;

    pub const ALL: [Self; 8] = [
        Self::Requested,
        Self::AcceptedEnRoutePickup,
        Self::ArrivedAtPickup,
        Self::PickedUpEnRouteDropoff,
        Self::ArrivedAtDropoff,
        Self::Completed,
        Self::Cancelled,
        Self::Rejected,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Rejected)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "delivery_requested",
            Self::AcceptedEnRoutePickup => "delivery_accepted_en_route_pickup",
            Self::ArrivedAtPickup => "delivery_arrived_at_pickup",
            Self::PickedUpEnRouteDropoff => "delivery_picked_up_en_route_dropoff",
            Self::ArrivedAtDropoff => "delivery_arrived_at_dropoff",
            Self::Completed => "delivery_completed",
            Self::Cancelled => "delivery_cancelled",
            Self::Rejected => "delivery_rejected",
        }
    }
}

/// Position of a product order within its lifecycle graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "new_product_order")]
    New,
    #[serde(rename = "product_order_accepted")]
    Accepted,
    #[serde(rename = "product_order_completed")]
    Completed,
    #[serde(rename = "product_order_rejected")]
    Rejected,
    #[serde(rename = "product_order_cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub const INITIAL: Self = Self::New;

    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Accepted,
        Self::Completed,
        Self::Rejected,
        Self::Cancelled,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Rejected | Self::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new_product_order",
            Self::Accepted => "product_order_accepted",
            Self::Completed => "product_order_completed",
            Self::Rejected => "product_order_rejected",
            Self::Cancelled => "product_order_cancelled",
        }
    }
}

/// Driver online/offline toggle. Symmetric, no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    Offline,
    Online,
}

impl PresenceStatus {
    pub const INITIAL: Self = Self::Offline;

    pub const ALL: [Self; 2] = [Self::Offline, Self::Online];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Online => "online",
        }
    }
}
