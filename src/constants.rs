/// Constants used throughout the application for consistency
pub struct Constants;

impl Constants {
    // Business hours (business-local time, applied to every calendar day)
    pub const OPEN_HOUR: u32 = 7;
    pub const CLOSE_HOUR: u32 = 17;

    // Minimum lead time between "now" and a bookable pickup
    pub const CUSTOMER_LEAD_MINUTES: i64 = 180;
    pub const STAFF_LEAD_MINUTES: i64 = 30;

    // Minimum rental duration and pickup/return input granularity
    pub const MIN_RENTAL_HOURS: i64 = 24;
    pub const MINUTE_STEP: u32 = 5;

    // Cadence for refreshing the computed minimum windows
    pub const TICK_SECONDS: u64 = 60;

    // Time display format in business-local time
    pub const DATETIME_FORMAT: &'static str = "%Y/%m/%d %H:%M";
    pub const DATE_FORMAT: &'static str = "%Y/%m/%d";
    pub const TIME_FORMAT: &'static str = "%H:%M";
}
