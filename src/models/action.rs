use serde::{Deserialize, Serialize};

/// Who is pressing the button. `Rider` also covers the customer side of
/// deliveries and product orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Rider,
    Driver,
    BusinessOwner,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rider => "rider",
            Self::Driver => "driver",
            Self::BusinessOwner => "business_owner",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of lifecycle actions across all activity kinds. Which of these
/// a role may invoke at a given status is decided by the capability map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Cancel,
    Contact,
    Accept,
    Reject,
    EnRoute,
    Arrive,
    Start,
    End,
    ArrivePickup,
    ItemPickedUp,
    ArriveDropoff,
    Complete,
    GoOnline,
    GoOffline,
}

impl Action {
    pub const ALL: [Self; 14] = [
        Self::Cancel,
        Self::Contact,
        Self::Accept,
        Self::Reject,
        Self::EnRoute,
        Self::Arrive,
        Self::Start,
        Self::End,
        Self::ArrivePickup,
        Self::ItemPickedUp,
        Self::ArriveDropoff,
        Self::Complete,
        Self::GoOnline,
        Self::GoOffline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cancel => "cancel",
            Self::Contact => "contact",
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::EnRoute => "en_route",
            Self::Arrive => "arrive",
            Self::Start => "start",
            Self::End => "end",
            Self::ArrivePickup => "arrive_pickup",
            Self::ItemPickedUp => "item_picked_up",
            Self::ArriveDropoff => "arrive_dropoff",
            Self::Complete => "complete",
            Self::GoOnline => "go_online",
            Self::GoOffline => "go_offline",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
