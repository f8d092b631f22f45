use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::models::{ActorRole, BookingWindow, FilterState, SearchQuery};
use crate::policy::BookingPolicy;
use crate::time::utc_to_business_string;
use crate::traits::VehicleSearch;
use crate::validate::{validate_window, ValidationError};
use crate::window::{compute_bounds, round_up_to_step, WindowBounds};

/// Live state of the vehicle rental filter: the chosen station/segment and
/// pickup/return pair, plus the minimums currently in force.
///
/// Editing one end of the window auto-corrects the other to preserve the
/// minimum duration; explicit values that break the rules are reported as
/// validation errors, never silently fixed. `refresh` re-validates against
/// fresh minimums as the clock ticks forward.
pub struct FilterSession {
    role: ActorRole,
    policy: BookingPolicy,
    station_id: Option<Uuid>,
    segment_id: Option<Uuid>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    bounds: WindowBounds,
    state: FilterState,
    last_error: Option<ValidationError>,
}

impl FilterSession {
    /// Create a session with pickup/return defaulted to the current minimums
    pub fn new(role: ActorRole, policy: BookingPolicy, now: DateTime<Utc>) -> Self {
        let bounds = compute_bounds(now, role, &policy);
        Self {
            role,
            policy,
            station_id: None,
            segment_id: None,
            start: bounds.min_start,
            end: bounds.min_end,
            bounds,
            state: FilterState::Idle,
            last_error: None,
        }
    }

    pub fn role(&self) -> ActorRole {
        self.role
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    pub fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Current window as submitted values
    pub fn window(&self) -> BookingWindow {
        BookingWindow {
            station_id: self.station_id,
            segment_id: self.segment_id,
            start: self.start,
            end: self.end,
        }
    }

    pub fn set_station(&mut self, station_id: Uuid) {
        self.station_id = Some(station_id);
        self.validate();
    }

    pub fn set_segment(&mut self, segment_id: Option<Uuid>) {
        self.segment_id = segment_id;
        self.validate();
    }

    /// Change the pickup time. The value is rounded up to the minute step;
    /// if the return no longer leaves the minimum duration it is advanced
    /// to pickup + 24h.
    pub fn set_start(&mut self, value: DateTime<Utc>) {
        let rounded = round_up_to_step(value, self.policy.minute_step);
        self.start = rounded;

        if !self.meets_min_duration(self.start, self.end) {
            let pushed = self.start + self.policy.min_rental;
            debug!(
                "pickup moved inside the minimum gap, advancing return to {}",
                utc_to_business_string(pushed)
            );
            self.end = pushed;
        }

        self.validate();
    }

    /// Change the return time. The value is rounded up to the minute step;
    /// if the pickup no longer leaves the minimum duration it is pulled
    /// back to return - 24h, clamped at the computed minimum pickup.
    pub fn set_end(&mut self, value: DateTime<Utc>) {
        let rounded = round_up_to_step(value, self.policy.minute_step);
        self.end = rounded;

        if !self.meets_min_duration(self.start, self.end) {
            let pulled = self.end - self.policy.min_rental;
            let clamped = pulled.max(self.bounds.min_start);
            debug!(
                "return moved inside the minimum gap, pulling pickup to {}",
                utc_to_business_string(clamped)
            );
            self.start = clamped;
        }

        self.validate();
    }

    /// Adopt freshly computed minimums (minute tick) and re-validate the
    /// chosen values. A window that was valid a minute ago can turn invalid
    /// here as the lead-time horizon advances.
    pub fn refresh(&mut self, bounds: WindowBounds) {
        self.bounds = bounds;
        self.validate();
    }

    /// Recompute minimums from the clock directly and re-validate
    pub fn refresh_from(&mut self, now: DateTime<Utc>) {
        let bounds = compute_bounds(now, self.role, &self.policy);
        self.refresh(bounds);
    }

    /// Produce the search parameters, or the validation error keeping the
    /// window out of the Valid state.
    pub fn query(&self) -> Result<SearchQuery, ValidationError> {
        let window = self.window();
        validate_window(&window, &self.bounds, &self.policy, self.role)?;

        let station_id = window.station_id.ok_or(ValidationError::MissingStation)?;
        Ok(SearchQuery {
            station_id,
            segment_id: window.segment_id,
            start: window.start,
            end: window.end,
        })
    }

    /// Hand the validated window to the search collaborator
    pub async fn submit(&self, search: &dyn VehicleSearch) -> Result<()> {
        let query = self.query()?;
        search.search(&query).await
    }

    fn meets_min_duration(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        (end - start).num_minutes() >= self.policy.min_rental.num_minutes()
    }

    fn validate(&mut self) {
        self.state = FilterState::Validating;
        match validate_window(&self.window(), &self.bounds, &self.policy, self.role) {
            Ok(()) => {
                self.state = FilterState::Valid;
                self.last_error = None;
            }
            Err(e) => {
                debug!("booking window invalid: {}", e);
                self.state = FilterState::Invalid;
                self.last_error = Some(e);
            }
        }
    }
}
