use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use ev_rental_booking::models::ActorRole;
use ev_rental_booking::policy::BookingPolicy;
use ev_rental_booking::ticker::{delay_to_next_minute, MinuteTicker};
use ev_rental_booking::traits::TestClock;

#[test]
fn test_delay_aligns_to_minute_boundary() {
    let on_boundary = Utc.with_ymd_and_hms(2026, 3, 10, 5, 0, 0).unwrap();
    assert_eq!(
        delay_to_next_minute(on_boundary),
        Duration::milliseconds(60_000)
    );

    let mid_minute = on_boundary + Duration::seconds(30) + Duration::milliseconds(500);
    assert_eq!(
        delay_to_next_minute(mid_minute),
        Duration::milliseconds(29_500)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_ticker_publishes_fresh_bounds_and_stops_on_shutdown() {
    let start = Utc.with_ymd_and_hms(2026, 3, 10, 2, 0, 30).unwrap();
    let clock = Arc::new(TestClock::new(start));
    let ticker = MinuteTicker::spawn(clock, ActorRole::Staff, BookingPolicy::default());

    let mut rx = ticker.subscribe();
    rx.changed().await.expect("ticker should publish");

    let bounds = *rx.borrow();
    assert_eq!(bounds.min_end - bounds.min_start, Duration::days(1));

    ticker.shutdown();

    // Once the task is gone the channel closes
    while rx.changed().await.is_ok() {}
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_dropping_ticker_cancels_the_task() {
    let start = Utc.with_ymd_and_hms(2026, 3, 10, 2, 0, 30).unwrap();
    let clock = Arc::new(TestClock::new(start));
    let ticker = MinuteTicker::spawn(clock, ActorRole::Customer, BookingPolicy::default());

    let mut rx = ticker.subscribe();
    drop(ticker);

    while rx.changed().await.is_ok() {}
}
