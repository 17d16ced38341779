//! Driven port for the current-weather and forecast provider.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::ForecastSample;

/// Current conditions at a coordinate, plus the provider's raw payload.
///
/// The raw payload is what gets persisted and handed to the advice
/// generator; it is an opaque pass-through, never re-validated.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in °C.
    pub temperature: f64,
    /// Feels-like temperature in °C.
    pub feels_like: f64,
    /// Relative humidity percentage.
    pub humidity: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Short textual description.
    pub description: String,
    /// Full raw provider response.
    pub raw: Value,
}

/// Errors surfaced while calling the weather provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeatherSourceError {
    /// Network transport failed before a response arrived.
    #[error("weather transport failed: {message}")]
    Transport { message: String },

    /// The provider answered with a non-success status.
    #[error("weather upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("weather response decode failed: {message}")]
    Decode { message: String },
}

impl WeatherSourceError {
    /// Create a transport error with the given message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a status error for a non-success upstream response.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error with the given message.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for the external weather provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch current conditions for a coordinate.
    async fn current(&self, lat: f64, lon: f64) -> Result<CurrentConditions, WeatherSourceError>;

    /// Fetch the raw 3-hour-step samples of the 5-day forecast. No
    /// aggregation happens here.
    async fn five_day_forecast(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<ForecastSample>, WeatherSourceError>;
}

/// Fixture source returning mild canned conditions and a fixed two-day
/// forecast (2026-02-16 and 2026-02-17, four samples).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureWeatherSource;

#[async_trait]
impl WeatherSource for FixtureWeatherSource {
    async fn current(&self, lat: f64, lon: f64) -> Result<CurrentConditions, WeatherSourceError> {
        Ok(CurrentConditions {
            temperature: 20.5,
            feels_like: 19.8,
            humidity: 55.0,
            wind_speed: 3.2,
            description: "scattered clouds".to_owned(),
            raw: json!({
                "coord": { "lat": lat, "lon": lon },
                "main": { "temp": 20.5, "feels_like": 19.8, "humidity": 55 },
                "wind": { "speed": 3.2 },
                "weather": [{ "description": "scattered clouds", "icon": "03d" }],
            }),
        })
    }

    async fn five_day_forecast(
        &self,
        _lat: f64,
        _lon: f64,
    ) -> Result<Vec<ForecastSample>, WeatherSourceError> {
        // 2026-02-16T00:00:00Z and every 3 hours after.
        const BASE: i64 = 1_771_200_000;
        Ok(vec![
            ForecastSample {
                timestamp: BASE,
                temperature: Some(18.0),
                icon: Some("03d".to_owned()),
                description: Some("scattered clouds".to_owned()),
            },
            ForecastSample {
                timestamp: BASE + 3 * 3600,
                temperature: Some(22.0),
                icon: Some("01d".to_owned()),
                description: Some("clear sky".to_owned()),
            },
            ForecastSample {
                timestamp: BASE + 24 * 3600,
                temperature: Some(14.5),
                icon: Some("10d".to_owned()),
                description: Some("light rain".to_owned()),
            },
            ForecastSample {
                timestamp: BASE + 27 * 3600,
                temperature: Some(16.0),
                icon: Some("10d".to_owned()),
                description: Some("light rain".to_owned()),
            },
        ])
    }
}
