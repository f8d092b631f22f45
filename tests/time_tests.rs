use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

use ev_rental_booking::time::*;

#[test]
fn test_utc_to_business_conversion() {
    // Midnight UTC is 07:00 in Indochina Time
    let utc_time = DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc);

    assert_eq!(utc_to_business_string(utc_time), "2026/01/01 07:00");
    assert_eq!(utc_to_business_date_string(utc_time), "2026/01/01");
    assert_eq!(utc_to_business_time_string(utc_time), "07:00");
}

#[test]
fn test_business_to_utc_conversion() {
    let utc_result = business_to_utc(2026, 1, 1, 7, 0);
    assert!(utc_result.is_some());

    let utc_time = utc_result.unwrap();
    assert_eq!(utc_time.hour(), 0); // Should be midnight UTC
    assert_eq!(utc_time.minute(), 0);
}

#[test]
fn test_round_trip_conversion() {
    // UTC -> business time -> UTC should be consistent
    let original_utc = DateTime::parse_from_rfc3339("2026-06-15T14:30:00Z")
        .unwrap()
        .with_timezone(&Utc);

    let local_time = utc_to_business(original_utc);
    let year = local_time.year();
    let month = local_time.month();
    let day = local_time.day();
    let hour = local_time.hour();
    let minute = local_time.minute();

    let converted_back = business_to_utc(year, month, day, hour, minute).unwrap();

    assert_eq!(original_utc.date_naive(), converted_back.date_naive());
    assert_eq!(original_utc.hour(), converted_back.hour());
    assert_eq!(original_utc.minute(), converted_back.minute());
}

#[test]
fn test_naive_resolution_matches_component_parse() {
    let naive = chrono::NaiveDate::from_ymd_opt(2026, 3, 10)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap();

    let resolved = business_naive_to_utc(naive);
    let parsed = business_to_utc(2026, 3, 10, 9, 15).unwrap();
    assert_eq!(resolved, parsed);
}

#[test]
fn test_is_past() {
    assert!(is_past(Utc::now() - Duration::hours(1)));
    assert!(!is_past(Utc::now() + Duration::hours(1)));
}

#[test]
fn test_offset_string() {
    assert_eq!(business_offset_string(), "ICT (UTC+7)");
}
