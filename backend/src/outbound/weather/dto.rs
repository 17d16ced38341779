//! DTOs for decoding weather provider responses.
//!
//! Current conditions are decoded from the same bytes that get stored raw;
//! the forecast list is mapped into domain samples with lenient temperature
//! handling (non-numeric values become `None` instead of failing the whole
//! decode).

use serde::Deserialize;
use serde_json::Value;

use crate::domain::ForecastSample;

#[derive(Debug, Deserialize)]
pub(super) struct CurrentDto {
    pub(super) main: CurrentMainDto,
    pub(super) wind: CurrentWindDto,
    #[serde(default)]
    pub(super) weather: Vec<WeatherDescriptionDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CurrentMainDto {
    pub(super) temp: f64,
    pub(super) feels_like: f64,
    pub(super) humidity: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct CurrentWindDto {
    pub(super) speed: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct WeatherDescriptionDto {
    #[serde(default)]
    pub(super) description: Option<String>,
    #[serde(default)]
    pub(super) icon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ForecastDto {
    #[serde(default)]
    pub(super) list: Vec<ForecastEntryDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ForecastEntryDto {
    pub(super) dt: i64,
    #[serde(default)]
    pub(super) main: Option<ForecastMainDto>,
    #[serde(default)]
    pub(super) weather: Vec<WeatherDescriptionDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ForecastMainDto {
    /// Kept as raw JSON so a non-numeric temperature degrades to `None`
    /// rather than rejecting the whole payload.
    #[serde(default)]
    pub(super) temp: Option<Value>,
}

impl ForecastDto {
    pub(super) fn into_samples(self) -> Vec<ForecastSample> {
        self.list
            .into_iter()
            .map(ForecastEntryDto::into_sample)
            .collect()
    }
}

impl ForecastEntryDto {
    fn into_sample(self) -> ForecastSample {
        let mut weather = self.weather.into_iter();
        let first = weather.next();
        ForecastSample {
            timestamp: self.dt,
            temperature: self
                .main
                .and_then(|main| main.temp)
                .as_ref()
                .and_then(Value::as_f64),
            icon: first.as_ref().and_then(|w| w.icon.clone()),
            description: first.and_then(|w| w.description),
        }
    }
}
