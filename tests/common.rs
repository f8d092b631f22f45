use chrono::{DateTime, Utc};

use ev_rental_booking::time::business_to_utc;

/// Build a UTC instant from business-local wall-clock components
#[allow(dead_code)]
pub fn business_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    business_to_utc(year, month, day, hour, minute).expect("valid business-local time")
}
