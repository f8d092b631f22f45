use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Asia::Ho_Chi_Minh;
use chrono_tz::Tz;

use crate::constants::Constants;

/// Fixed business timezone for all stations (Indochina Time)
pub const BUSINESS_TZ: Tz = Ho_Chi_Minh;

/// Convert UTC DateTime to business-local time
pub fn utc_to_business(utc_time: DateTime<Utc>) -> DateTime<Tz> {
    BUSINESS_TZ.from_utc_datetime(&utc_time.naive_utc())
}

/// Convert UTC DateTime to business-local formatted string
pub fn utc_to_business_string(utc_time: DateTime<Utc>) -> String {
    utc_to_business(utc_time)
        .format(Constants::DATETIME_FORMAT)
        .to_string()
}

/// Convert UTC DateTime to business-local date string
pub fn utc_to_business_date_string(utc_time: DateTime<Utc>) -> String {
    utc_to_business(utc_time)
        .format(Constants::DATE_FORMAT)
        .to_string()
}

/// Convert UTC DateTime to business-local time string
pub fn utc_to_business_time_string(utc_time: DateTime<Utc>) -> String {
    utc_to_business(utc_time)
        .format(Constants::TIME_FORMAT)
        .to_string()
}

/// Parse business-local date/time components and convert to UTC
pub fn business_to_utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Option<DateTime<Utc>> {
    let naive = chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))?;

    let local_time = BUSINESS_TZ.from_local_datetime(&naive).single()?;

    Some(local_time.with_timezone(&Utc))
}

/// Resolve a naive business-local timestamp to UTC.
/// ICT has no DST, so local times never fall in an offset gap.
pub fn business_naive_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match BUSINESS_TZ.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&naive) - Duration::hours(7),
    }
}

/// Check if a time is in the past
pub fn is_past(utc_time: DateTime<Utc>) -> bool {
    utc_time < Utc::now()
}

/// Business timezone offset string for display
pub fn business_offset_string() -> &'static str {
    "ICT (UTC+7)"
}
