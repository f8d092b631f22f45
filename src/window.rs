use chrono::{DateTime, Duration, NaiveDateTime, Timelike, Utc};

use crate::models::ActorRole;
use crate::policy::BookingPolicy;
use crate::time::{business_naive_to_utc, utc_to_business};

/// Earliest legal pickup and return times for the current clock reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub min_start: DateTime<Utc>,
    pub min_end: DateTime<Utc>,
}

/// Compute the minimum pickup/return window for a role at a given instant.
///
/// The pickup must leave the role's lead time from "now" and land inside
/// business hours. If `now + lead` already falls at or past closing, the
/// earliest pickup snaps to opening time the next calendar day; before
/// opening it snaps to opening time the same day. Otherwise the pickup is
/// "now" with minutes rounded up to the step, plus the lead time. The
/// minimum return always trails the minimum pickup by one day.
pub fn compute_bounds(now: DateTime<Utc>, role: ActorRole, policy: &BookingPolicy) -> WindowBounds {
    let local_now = utc_to_business(now).naive_local();
    let lead = policy.lead_for(role);
    let required_now = local_now + lead;

    let past_close = required_now.hour() >= policy.close_hour;
    let before_open = required_now.hour() < policy.open_hour;

    let min_start = if past_close || before_open {
        let day = if past_close {
            local_now.date() + Duration::days(1)
        } else {
            local_now.date()
        };
        day.and_hms_opt(policy.open_hour, 0, 0)
            .unwrap_or(required_now)
    } else {
        round_minutes_up(local_now, policy.minute_step) + lead
    };

    let min_end = min_start + Duration::days(1);

    WindowBounds {
        min_start: business_naive_to_utc(min_start),
        min_end: business_naive_to_utc(min_end),
    }
}

/// Round a UTC timestamp up to the next minute-step boundary in business
/// time. Seconds are dropped; a minute already on the step is kept as is.
pub fn round_up_to_step(value: DateTime<Utc>, step: u32) -> DateTime<Utc> {
    let local = utc_to_business(value).naive_local();
    business_naive_to_utc(round_minutes_up(local, step))
}

fn round_minutes_up(value: NaiveDateTime, step: u32) -> NaiveDateTime {
    let trimmed = value
        .with_second(0)
        .and_then(|v| v.with_nanosecond(0))
        .unwrap_or(value);

    let rem = trimmed.minute() % step;
    if rem == 0 {
        trimmed
    } else {
        trimmed + Duration::minutes((step - rem) as i64)
    }
}
