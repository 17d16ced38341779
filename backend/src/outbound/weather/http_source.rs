//! Reqwest-backed weather source against the OpenWeather data API.
//!
//! Two endpoints share one client: current conditions (whose raw body is
//! preserved verbatim for persistence and advice) and the 5-day/3-hour
//! forecast. Temperatures are requested in metric units.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::dto::{CurrentDto, ForecastDto};
use crate::domain::ForecastSample;
use crate::domain::ports::{CurrentConditions, WeatherSource, WeatherSourceError};

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Weather source adapter performing HTTP GET requests with an API key.
pub struct OpenWeatherSource {
    client: Client,
    api_key: String,
}

impl OpenWeatherSource {
    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(api_key: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    async fn fetch(&self, url: &str, lat: f64, lon: f64) -> Result<Vec<u8>, WeatherSourceError> {
        let response = self
            .client
            .get(url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", "metric".to_owned()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    async fn current(&self, lat: f64, lon: f64) -> Result<CurrentConditions, WeatherSourceError> {
        let body = self.fetch(CURRENT_URL, lat, lon).await?;
        parse_current(&body)
    }

    async fn five_day_forecast(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<ForecastSample>, WeatherSourceError> {
        let body = self.fetch(FORECAST_URL, lat, lon).await?;
        parse_forecast(&body)
    }
}

fn parse_current(body: &[u8]) -> Result<CurrentConditions, WeatherSourceError> {
    let raw: Value = serde_json::from_slice(body)
        .map_err(|err| WeatherSourceError::decode(format!("invalid weather payload: {err}")))?;
    let decoded: CurrentDto = serde_json::from_slice(body)
        .map_err(|err| WeatherSourceError::decode(format!("invalid weather payload: {err}")))?;

    Ok(CurrentConditions {
        temperature: decoded.main.temp,
        feels_like: decoded.main.feels_like,
        humidity: decoded.main.humidity,
        wind_speed: decoded.wind.speed,
        description: decoded
            .weather
            .into_iter()
            .next()
            .and_then(|w| w.description)
            .unwrap_or_default(),
        raw,
    })
}

fn parse_forecast(body: &[u8]) -> Result<Vec<ForecastSample>, WeatherSourceError> {
    let decoded: ForecastDto = serde_json::from_slice(body)
        .map_err(|err| WeatherSourceError::decode(format!("invalid forecast payload: {err}")))?;
    Ok(decoded.into_samples())
}

fn map_transport_error(error: reqwest::Error) -> WeatherSourceError {
    WeatherSourceError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> WeatherSourceError {
    let preview = String::from_utf8_lossy(body)
        .chars()
        .take(160)
        .collect::<String>();
    WeatherSourceError::status(status.as_u16(), preview)
}
