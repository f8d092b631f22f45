use chrono::{DateTime, Duration, Timelike, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::models::ActorRole;
use crate::policy::BookingPolicy;
use crate::window::{compute_bounds, WindowBounds};
use crate::traits::Clock;

/// Delay from `now` to the next wall-clock minute boundary. A reading
/// exactly on the boundary waits a full minute.
pub fn delay_to_next_minute(now: DateTime<Utc>) -> Duration {
    let elapsed_ms = now.second() as i64 * 1000 + now.timestamp_subsec_millis() as i64;
    Duration::milliseconds(60_000 - elapsed_ms)
}

/// Recomputes the minimum booking window once per minute, aligned to the
/// wall-clock minute boundary, and publishes it on a watch channel.
///
/// The ticker owns its task: dropping it (or calling `shutdown`) aborts
/// the loop, so no timer outlives the component that started it.
pub struct MinuteTicker {
    handle: JoinHandle<()>,
    rx: watch::Receiver<WindowBounds>,
}

impl MinuteTicker {
    pub fn spawn(clock: Arc<dyn Clock>, role: ActorRole, policy: BookingPolicy) -> Self {
        let initial = compute_bounds(clock.now_utc(), role, &policy);
        let (tx, rx) = watch::channel(initial);

        let handle = tokio::spawn(async move {
            info!("Starting booking window ticker");

            loop {
                let now = clock.now_utc();
                let target = now + delay_to_next_minute(now);
                clock.sleep_until(target).await;

                let bounds = compute_bounds(clock.now_utc(), role, &policy);
                if tx.send(bounds).is_err() {
                    // No receivers left
                    break;
                }
            }
        });

        Self { handle, rx }
    }

    /// Subscribe to refreshed bounds
    pub fn subscribe(&self) -> watch::Receiver<WindowBounds> {
        self.rx.clone()
    }

    /// Most recently published bounds
    pub fn current(&self) -> WindowBounds {
        *self.rx.borrow()
    }

    /// Stop the tick loop
    pub fn shutdown(&self) {
        debug!("Stopping booking window ticker");
        self.handle.abort();
    }
}

impl Drop for MinuteTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
