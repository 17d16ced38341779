//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; the
//! wrappers here mirror their structure for documentation purposes using
//! utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for the `{"error": <message>}` failure envelope.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(dead_code, reason = "used only for OpenAPI schema generation")]
pub struct ErrorSchema {
    /// Human-readable failure message.
    #[schema(example = "Location not found")]
    error: String,
}

/// OpenAPI schema for [`crate::domain::WeatherRequest`].
#[derive(ToSchema)]
#[schema(as = crate::domain::WeatherRequest, rename_all = "camelCase")]
#[expect(dead_code, reason = "used only for OpenAPI schema generation")]
pub struct WeatherRequestSchema {
    /// Record identifier.
    #[schema(value_type = String, format = "uuid")]
    id: String,
    /// Original user-entered location text.
    location_raw: String,
    /// Canonical `"City, Country"` name.
    #[schema(example = "Tokyo, JP")]
    location_name: String,
    /// Latitude.
    lat: f64,
    /// Longitude.
    lon: f64,
    /// First day of the range (`YYYY-MM-DD`).
    #[schema(value_type = String, format = "date")]
    start_date: String,
    /// Last day of the range (`YYYY-MM-DD`).
    #[schema(value_type = String, format = "date")]
    end_date: String,
    /// Opaque weather snapshot captured at creation time.
    #[schema(value_type = Object)]
    weather_data: serde_json::Value,
    /// Generated advice, absent without a configured credential.
    ai_advice: Option<String>,
    /// Derived links computed from the coordinates.
    #[schema(value_type = Object)]
    extra_data: Option<serde_json::Value>,
    /// Server-assigned creation timestamp.
    #[schema(value_type = String, format = "date-time")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::ForecastDay`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ForecastDay)]
#[expect(dead_code, reason = "used only for OpenAPI schema generation")]
pub struct ForecastDaySchema {
    /// Calendar date (`YYYY-MM-DD`).
    #[schema(value_type = String, format = "date")]
    day: String,
    /// Lowest temperature of the day, °C.
    min: Option<f64>,
    /// Highest temperature of the day, °C.
    max: Option<f64>,
    /// Provider icon code of the day's first sample.
    icon: Option<String>,
    /// Description of the day's first sample.
    description: Option<String>,
}

/// OpenAPI schema for [`crate::domain::ForecastReport`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ForecastReport, rename_all = "camelCase")]
#[expect(dead_code, reason = "used only for OpenAPI schema generation")]
pub struct ForecastReportSchema {
    /// Canonical `"City, Country"` name.
    #[schema(example = "Tokyo, JP")]
    location_name: String,
    /// Latitude.
    lat: f64,
    /// Longitude.
    lon: f64,
    /// Aggregated days inside the requested range.
    days: Vec<ForecastDaySchema>,
}
