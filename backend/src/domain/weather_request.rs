//! The persisted lookup record and its creation/update payloads.
//!
//! `WeatherRequest` is the only aggregate in the system: one row per
//! completed lookup, created atomically by the creation flow and mutated only
//! through [`WeatherRequestPatch`]. `id` and `created_at` are immutable.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::Error;

/// Inclusive date-only range with the `start <= end` invariant enforced at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::invalid_request`] when the ordering invariant fails.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, Error> {
        if start > end {
            return Err(Error::invalid_request("startDate must be <= endDate"));
        }
        Ok(Self { start, end })
    }

    /// First day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `day` falls inside the range, endpoints included.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// One persisted lookup: inputs, fetched weather, and generated advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRequest {
    /// Opaque unique identifier, assigned at creation.
    pub id: Uuid,
    /// Original user-entered location text.
    pub location_raw: String,
    /// Canonical `"City, Country"` name from geocoding.
    pub location_name: String,
    /// Latitude in WGS84.
    pub lat: f64,
    /// Longitude in WGS84.
    pub lon: f64,
    /// First day of the requested range.
    pub start_date: NaiveDate,
    /// Last day of the requested range.
    pub end_date: NaiveDate,
    /// Opaque snapshot of the weather provider's response at creation time.
    pub weather_data: Value,
    /// Advice generated once at creation; absent when no credential was
    /// configured.
    pub ai_advice: Option<String>,
    /// Derived links computed from the coordinates.
    pub extra_data: Option<Value>,
    /// Server-assigned creation timestamp, the sole listing sort key.
    pub created_at: DateTime<Utc>,
}

/// Validated input for the creation flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWeatherRequest {
    /// Trimmed, non-empty location query.
    pub location: String,
    /// Requested date range.
    pub range: DateRange,
}

impl CreateWeatherRequest {
    /// Validate the raw creation inputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::invalid_request`] for a blank location or an
    /// out-of-order range. Runs before any external call is made.
    pub fn new(location: &str, start: NaiveDate, end: NaiveDate) -> Result<Self, Error> {
        let location = location.trim();
        if location.is_empty() {
            return Err(Error::invalid_request("location is required"));
        }
        Ok(Self {
            location: location.to_owned(),
            range: DateRange::new(start, end)?,
        })
    }
}

/// Partial update of a record; only populated fields change.
///
/// `ai_advice` distinguishes "set to null" (`Some(None)`) from "leave alone"
/// (`None`). When location text is supplied it overwrites both the raw and
/// the canonical name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherRequestPatch {
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub weather_data: Option<Value>,
    pub ai_advice: Option<Option<String>>,
    pub extra_data: Option<Value>,
}

impl WeatherRequestPatch {
    /// Whether the patch changes anything at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Re-validate the date ordering invariant, but only when the patch
    /// supplies both endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::invalid_request`] when both dates are supplied out of
    /// order.
    pub fn validate(&self) -> Result<(), Error> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            DateRange::new(start, end)?;
        }
        Ok(())
    }

    /// Apply the patch to an in-memory record, leaving `id` and `created_at`
    /// untouched.
    pub fn apply(&self, record: &mut WeatherRequest) {
        if let Some(location) = &self.location {
            record.location_raw = location.clone();
            record.location_name = location.clone();
        }
        if let Some(lat) = self.lat {
            record.lat = lat;
        }
        if let Some(lon) = self.lon {
            record.lon = lon;
        }
        if let Some(start) = self.start_date {
            record.start_date = start;
        }
        if let Some(end) = self.end_date {
            record.end_date = end;
        }
        if let Some(weather) = &self.weather_data {
            record.weather_data = weather.clone();
        }
        if let Some(advice) = &self.ai_advice {
            record.ai_advice = advice.clone();
        }
        if let Some(extra) = &self.extra_data {
            record.extra_data = Some(extra.clone());
        }
    }
}

/// Derived metadata persisted alongside a lookup: currently a map link for
/// the resolved coordinates.
pub fn extra_links(lat: f64, lon: f64) -> Value {
    json!({
        "mapUrl": format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=12/{lat}/{lon}"),
    })
}
