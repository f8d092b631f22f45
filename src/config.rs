use anyhow::{anyhow, Result};
use chrono::Duration;
use std::env;

use uuid::Uuid;

use crate::models::ActorRole;
use crate::policy::BookingPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub role: ActorRole,
    /// Pre-selected pickup station for the daemon, if any
    pub station_id: Option<Uuid>,
    pub policy: BookingPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let role = env::var("BOOKING_ROLE")
            .map(ActorRole::from)
            .unwrap_or(ActorRole::Customer);

        let station_id = match env::var("STATION_ID") {
            Ok(v) => Some(
                Uuid::parse_str(&v).map_err(|_| anyhow!("STATION_ID must be a valid UUID"))?,
            ),
            Err(_) => None,
        };

        let mut policy = BookingPolicy::default();

        if let Ok(v) = env::var("BOOKING_OPEN_HOUR") {
            policy.open_hour = v
                .parse()
                .map_err(|_| anyhow!("BOOKING_OPEN_HOUR must be an hour between 0 and 23"))?;
        }
        if let Ok(v) = env::var("BOOKING_CLOSE_HOUR") {
            policy.close_hour = v
                .parse()
                .map_err(|_| anyhow!("BOOKING_CLOSE_HOUR must be an hour between 0 and 23"))?;
        }
        if let Ok(v) = env::var("CUSTOMER_LEAD_MINUTES") {
            let minutes: i64 = v
                .parse()
                .map_err(|_| anyhow!("CUSTOMER_LEAD_MINUTES must be a positive number"))?;
            policy.customer_lead = Duration::minutes(minutes);
        }
        if let Ok(v) = env::var("STAFF_LEAD_MINUTES") {
            let minutes: i64 = v
                .parse()
                .map_err(|_| anyhow!("STAFF_LEAD_MINUTES must be a positive number"))?;
            policy.staff_lead = Duration::minutes(minutes);
        }

        if policy.close_hour > 23 || policy.open_hour >= policy.close_hour {
            return Err(anyhow!(
                "business hours must satisfy open < close within a single day"
            ));
        }
        if policy.customer_lead < Duration::zero() || policy.staff_lead < Duration::zero() {
            return Err(anyhow!("lead times must not be negative"));
        }

        Ok(Self {
            log_level,
            role,
            station_id,
            policy,
        })
    }
}
