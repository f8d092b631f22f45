use chrono::Duration;

use crate::constants::Constants;
use crate::models::ActorRole;

/// Booking rules applied when computing and validating rental windows.
/// Defaults come from `Constants`; the daemon can override them from the
/// environment via `Config`.
#[derive(Debug, Clone)]
pub struct BookingPolicy {
    pub open_hour: u32,
    pub close_hour: u32,
    pub minute_step: u32,
    pub min_rental: Duration,
    pub customer_lead: Duration,
    pub staff_lead: Duration,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            open_hour: Constants::OPEN_HOUR,
            close_hour: Constants::CLOSE_HOUR,
            minute_step: Constants::MINUTE_STEP,
            min_rental: Duration::hours(Constants::MIN_RENTAL_HOURS),
            customer_lead: Duration::minutes(Constants::CUSTOMER_LEAD_MINUTES),
            staff_lead: Duration::minutes(Constants::STAFF_LEAD_MINUTES),
        }
    }
}

impl BookingPolicy {
    /// Minimum gap between "now" and a bookable pickup for this role
    pub fn lead_for(&self, role: ActorRole) -> Duration {
        match role {
            ActorRole::Staff => self.staff_lead,
            ActorRole::Customer => self.customer_lead,
        }
    }
}
