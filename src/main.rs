use anyhow::Result;
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod constants;
mod filter;
mod models;
mod policy;
mod ticker;
pub mod time;
pub mod traits;
mod validate;
mod window;

use config::Config;
use filter::FilterSession;
use models::FilterState;
use ticker::MinuteTicker;
use traits::{Clock, LoggingVehicleSearch, SystemClock};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EV rental booking window service");

    // Load configuration
    let config = Config::from_env()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let mut session = FilterSession::new(config.role, config.policy.clone(), clock.now_utc());
    if let Some(station_id) = config.station_id {
        session.set_station(station_id);
    }

    let search = LoggingVehicleSearch;
    let ticker = MinuteTicker::spawn(clock, config.role, config.policy.clone());
    let mut bounds_rx = ticker.subscribe();

    let bounds = session.bounds();
    info!(
        "Earliest {} pickup: {} / earliest return: {} ({})",
        config.role,
        time::utc_to_business_string(bounds.min_start),
        time::utc_to_business_string(bounds.min_end),
        time::business_offset_string(),
    );

    loop {
        tokio::select! {
            changed = bounds_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let bounds = *bounds_rx.borrow();
                session.refresh(bounds);
                info!(
                    "Refreshed minimums: pickup {} / return {} (filter {})",
                    time::utc_to_business_string(bounds.min_start),
                    time::utc_to_business_string(bounds.min_end),
                    session.state(),
                );
                if session.state() == FilterState::Valid {
                    if let Err(e) = session.submit(&search).await {
                        warn!("Vehicle search dispatch failed: {}", e);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal");
                break;
            }
        }
    }

    ticker.shutdown();
    info!("Booking window service shutting down");
    Ok(())
}
