use std::fmt;

use chrono::Timelike;
use thiserror::Error;

use crate::models::{ActorRole, BookingWindow};
use crate::policy::BookingPolicy;
use crate::time::{utc_to_business, utc_to_business_string};
use crate::window::WindowBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowField {
    Pickup,
    Return,
}

impl fmt::Display for WindowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowField::Pickup => write!(f, "pickup"),
            WindowField::Return => write!(f, "return"),
        }
    }
}

/// Field-level validation failures for a submitted booking window.
/// These are local and non-fatal; nothing is clamped on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a pickup station is required")]
    MissingStation,

    #[error("{field} time must fall between {open:02}:00 and {close:02}:00")]
    OutsideBusinessHours {
        field: WindowField,
        open: u32,
        close: u32,
    },

    #[error("earliest {role} pickup is {min_start}")]
    InsufficientLeadTime { role: ActorRole, min_start: String },

    #[error("return must be at least {min_hours} hours after pickup")]
    InsufficientDuration { min_hours: i64 },
}

/// Validate a user-submitted window against the current minimums.
///
/// Checks in order: station selected, pickup within business hours, pickup
/// not before the computed minimum, return within business hours, and the
/// 24-hour minimum duration (at minute granularity, so an exactly-24h
/// window passes).
pub fn validate_window(
    window: &BookingWindow,
    bounds: &WindowBounds,
    policy: &BookingPolicy,
    role: ActorRole,
) -> Result<(), ValidationError> {
    if window.station_id.is_none() {
        return Err(ValidationError::MissingStation);
    }

    let start_hour = utc_to_business(window.start).hour();
    if start_hour < policy.open_hour || start_hour > policy.close_hour {
        return Err(ValidationError::OutsideBusinessHours {
            field: WindowField::Pickup,
            open: policy.open_hour,
            close: policy.close_hour,
        });
    }

    if window.start < bounds.min_start {
        return Err(ValidationError::InsufficientLeadTime {
            role,
            min_start: utc_to_business_string(bounds.min_start),
        });
    }

    let end_hour = utc_to_business(window.end).hour();
    if end_hour < policy.open_hour || end_hour > policy.close_hour {
        return Err(ValidationError::OutsideBusinessHours {
            field: WindowField::Return,
            open: policy.open_hour,
            close: policy.close_hour,
        });
    }

    let gap_minutes = (window.end - window.start).num_minutes();
    if gap_minutes < policy.min_rental.num_minutes() {
        return Err(ValidationError::InsufficientDuration {
            min_hours: policy.min_rental.num_hours(),
        });
    }

    Ok(())
}
