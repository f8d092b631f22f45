use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Who is making the booking. Staff get a shorter lead time than customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorRole {
    Customer,
    Staff,
}

impl ActorRole {
    pub fn is_staff(&self) -> bool {
        matches!(self, ActorRole::Staff)
    }
}

impl From<String> for ActorRole {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Staff" => Self::Staff,
            "Customer" => Self::Customer,
            _ => Self::Customer,
        }
    }
}

impl From<ActorRole> for String {
    fn from(role: ActorRole) -> Self {
        match role {
            ActorRole::Customer => "Customer".to_string(),
            ActorRole::Staff => "Staff".to_string(),
        }
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorRole::Customer => write!(f, "customer"),
            ActorRole::Staff => write!(f, "staff"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: Uuid,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSegment {
    pub id: Uuid,
    pub name: String,
}

/// A pickup/return window as chosen in the rental filter.
/// Timestamps are stored in UTC and interpreted in the business timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    pub station_id: Option<Uuid>,
    pub segment_id: Option<Uuid>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Validated parameters handed to the vehicle availability search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub station_id: Uuid,
    pub segment_id: Option<Uuid>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Lifecycle of the filter session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    Idle,
    Validating,
    Valid,
    Invalid,
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterState::Idle => write!(f, "idle"),
            FilterState::Validating => write!(f, "validating"),
            FilterState::Valid => write!(f, "valid"),
            FilterState::Invalid => write!(f, "invalid"),
        }
    }
}
