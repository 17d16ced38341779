//! Driving port for the daily-forecast view.

use async_trait::async_trait;

use crate::domain::{DateRange, Error, ForecastReport};

/// Parameters of one forecast lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    /// Free-text location query, already trimmed and non-empty.
    pub location: String,
    /// Requested date range.
    pub range: DateRange,
}

/// Use-case resolving a location and aggregating its 5-day forecast into
/// daily summaries.
#[async_trait]
pub trait ForecastQuery: Send + Sync {
    /// Geocode, fetch the forecast, and aggregate per calendar day.
    async fn daily_forecast(&self, request: ForecastRequest) -> Result<ForecastReport, Error>;
}
