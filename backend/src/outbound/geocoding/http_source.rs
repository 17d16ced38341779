//! Reqwest-backed geocoder against the OpenWeather direct-geocoding API.
//!
//! Transport only: request serialisation, timeout and status mapping, and
//! JSON decoding into the domain location.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::dto::GeoEntryDto;
use crate::domain::ports::{GeocodedLocation, Geocoder, GeocoderError};

const GEOCODING_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Geocoder adapter performing HTTP GET requests with an API key.
pub struct OpenWeatherGeocoder {
    client: Client,
    api_key: String,
}

impl OpenWeatherGeocoder {
    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(api_key: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }
}

#[async_trait]
impl Geocoder for OpenWeatherGeocoder {
    async fn resolve(&self, query: &str) -> Result<GeocodedLocation, GeocoderError> {
        let response = self
            .client
            .get(GEOCODING_URL)
            .query(&[("q", query), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_best_match(query, body.as_ref())
    }
}

fn parse_best_match(query: &str, body: &[u8]) -> Result<GeocodedLocation, GeocoderError> {
    let matches: Vec<GeoEntryDto> = serde_json::from_slice(body)
        .map_err(|err| GeocoderError::decode(format!("invalid geocoding payload: {err}")))?;

    matches
        .into_iter()
        .next()
        .map(GeoEntryDto::into_domain)
        .ok_or_else(|| GeocoderError::no_match(query))
}

fn map_transport_error(error: reqwest::Error) -> GeocoderError {
    GeocoderError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GeocoderError {
    GeocoderError::status(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
