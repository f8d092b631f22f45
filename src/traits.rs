use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::SearchQuery;

/// Trait for clock operations to enable deterministic testing
#[async_trait]
pub trait Clock: Send + Sync {
    /// Get current UTC time
    fn now_utc(&self) -> DateTime<Utc>;

    /// Sleep until a specific time
    async fn sleep_until(&self, target: DateTime<Utc>);

    /// Sleep for a duration (convenience method)
    async fn sleep_duration(&self, duration: chrono::Duration) {
        let target = self.now_utc() + duration;
        self.sleep_until(target).await;
    }
}

/// Production implementation using system clock
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep_until(&self, target: DateTime<Utc>) {
        let now = Utc::now();
        if target > now {
            let duration = target - now;
            if let Ok(std_duration) = duration.to_std() {
                tokio::time::sleep(std_duration).await;
            }
        }
    }
}

/// Trait for the vehicle availability search collaborator. The search
/// transport (REST, caching) lives outside this crate; the filter only
/// hands over validated queries.
#[async_trait]
pub trait VehicleSearch: Send + Sync {
    /// Run an availability search for a validated booking window
    async fn search(&self, query: &SearchQuery) -> Result<()>;
}

/// Production stand-in that logs the outgoing query
pub struct LoggingVehicleSearch;

#[async_trait]
impl VehicleSearch for LoggingVehicleSearch {
    async fn search(&self, query: &SearchQuery) -> Result<()> {
        info!("Dispatching vehicle search: {}", serde_json::to_string(query)?);
        Ok(())
    }
}

/// Mock implementation for testing
#[derive(Debug, Clone)]
pub struct MockVehicleSearch {
    pub received: Arc<Mutex<Vec<SearchQuery>>>,
    pub failure_mode: Arc<Mutex<bool>>, // Simulate backend outages
}

impl MockVehicleSearch {
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            failure_mode: Arc::new(Mutex::new(false)),
        }
    }

    /// Enable search failure simulation
    pub async fn set_failure_mode(&self, enabled: bool) {
        *self.failure_mode.lock().await = enabled;
    }

    /// Get all received queries
    pub async fn received_queries(&self) -> Vec<SearchQuery> {
        self.received.lock().await.clone()
    }

    /// Clear all recorded queries
    pub async fn clear(&self) {
        self.received.lock().await.clear();
    }
}

#[async_trait]
impl VehicleSearch for MockVehicleSearch {
    async fn search(&self, query: &SearchQuery) -> Result<()> {
        if *self.failure_mode.lock().await {
            return Err(anyhow!("search backend unavailable"));
        }

        self.received.lock().await.push(query.clone());
        Ok(())
    }
}

impl Default for MockVehicleSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Test clock implementation for deterministic time control
#[derive(Debug, Clone)]
pub struct TestClock {
    current_time: Arc<Mutex<DateTime<Utc>>>,
}

impl TestClock {
    pub fn new(initial_time: DateTime<Utc>) -> Self {
        Self {
            current_time: Arc::new(Mutex::new(initial_time)),
        }
    }

    /// Advance the clock by a specific duration
    pub async fn advance(&self, duration: chrono::Duration) {
        let mut time = self.current_time.lock().await;
        *time = *time + duration;
    }

    /// Set the clock to a specific time
    pub async fn set_time(&self, new_time: DateTime<Utc>) {
        let mut time = self.current_time.lock().await;
        *time = new_time;
    }
}

#[async_trait]
impl Clock for TestClock {
    fn now_utc(&self) -> DateTime<Utc> {
        // Use a blocking operation here since tokio async functions
        // can't be called from non-async contexts
        futures::executor::block_on(async { *self.current_time.lock().await })
    }

    async fn sleep_until(&self, target: DateTime<Utc>) {
        let current = *self.current_time.lock().await;
        if target > current {
            // In test mode, we don't actually sleep, just advance time
            let mut time = self.current_time.lock().await;
            *time = target;
        }
    }
}
