//! Application service implementing the driving ports.
//!
//! One service orchestrates the whole system: the creation chain (geocode,
//! weather fetch, advice, insert), record CRUD and export, daily forecast
//! aggregation, and the interactive Q&A. External calls run strictly in
//! sequence with no retries; the first failure aborts the operation before
//! anything is written.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::advice::{advice_prompt, question_prompt};
use crate::domain::export::{self, ExportDocument, ExportFormat};
use crate::domain::forecast::aggregate_daily;
use crate::domain::ports::{
    AdviceSource, Assistant, ForecastQuery, ForecastRequest, Geocoder, GeocoderError,
    RequestDirectory, WeatherRequestRepository, WeatherRequestRepositoryError, WeatherSource,
};
use crate::domain::weather_request::extra_links;
use crate::domain::{
    CreateWeatherRequest, Error, ForecastReport, WeatherRequest, WeatherRequestPatch,
};

/// Literal fallback returned when the completion provider yields nothing.
const NO_ANSWER: &str = "No answer.";

/// The application service; generically wired from trait objects so adapters
/// can be swapped per deployment (real HTTP/Diesel, or fixtures).
#[derive(Clone)]
pub struct WeatherDeskService {
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherSource>,
    advice: Arc<dyn AdviceSource>,
    repo: Arc<dyn WeatherRequestRepository>,
}

impl WeatherDeskService {
    /// Assemble the service from its four collaborators.
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        weather: Arc<dyn WeatherSource>,
        advice: Arc<dyn AdviceSource>,
        repo: Arc<dyn WeatherRequestRepository>,
    ) -> Self {
        Self {
            geocoder,
            weather,
            advice,
            repo,
        }
    }
}

fn map_geocoder_error(error: GeocoderError) -> Error {
    match error {
        GeocoderError::NoMatch { .. } => Error::not_found("Location not found"),
        other => {
            error!(error = %other, "geocoding failed");
            Error::internal("Geocoding service unavailable")
        }
    }
}

fn map_repository_error(error: WeatherRequestRepositoryError) -> Error {
    match error {
        WeatherRequestRepositoryError::Connection { message } => {
            error!(message = %message, "record store unreachable");
            Error::internal("record store unavailable")
        }
        WeatherRequestRepositoryError::Query { message } => {
            error!(message = %message, "record store query failed");
            Error::internal("record store error")
        }
    }
}

#[async_trait]
impl RequestDirectory for WeatherDeskService {
    async fn create(&self, input: CreateWeatherRequest) -> Result<WeatherRequest, Error> {
        let geo = self
            .geocoder
            .resolve(&input.location)
            .await
            .map_err(map_geocoder_error)?;

        let conditions = self
            .weather
            .current(geo.lat, geo.lon)
            .await
            .map_err(|err| {
                error!(error = %err, "current weather fetch failed");
                Error::internal("Weather service failed")
            })?;

        // Advice is optional: a missing credential yields None and an
        // upstream hiccup here must not abort the creation flow.
        let prompt = advice_prompt(&geo.name, &input.range, &conditions.raw);
        let ai_advice = match self.advice.travel_advice(&prompt).await {
            Ok(advice) => advice,
            Err(err) => {
                warn!(error = %err, "advice generation failed, continuing without advice");
                None
            }
        };

        let record = WeatherRequest {
            id: Uuid::new_v4(),
            location_raw: input.location,
            location_name: geo.name,
            lat: geo.lat,
            lon: geo.lon,
            start_date: input.range.start(),
            end_date: input.range.end(),
            weather_data: conditions.raw,
            ai_advice,
            extra_data: Some(extra_links(geo.lat, geo.lon)),
            created_at: Utc::now(),
        };

        self.repo
            .insert(&record)
            .await
            .map_err(map_repository_error)?;
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<WeatherRequest>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }

    async fn get(&self, id: Uuid) -> Result<WeatherRequest, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("Not found"))
    }

    async fn update(&self, id: Uuid, patch: WeatherRequestPatch) -> Result<WeatherRequest, Error> {
        patch.validate()?;
        if patch.is_empty() {
            // Nothing to change; behave as a read.
            return self.get(id).await;
        }
        self.repo
            .update(id, patch)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("Not found"))
    }

    async fn delete(&self, id: Uuid) -> Result<(), Error> {
        let removed = self.repo.delete(id).await.map_err(map_repository_error)?;
        if !removed {
            return Err(Error::not_found("Not found"));
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), Error> {
        self.repo.delete_all().await.map_err(map_repository_error)?;
        Ok(())
    }

    async fn export(&self, format: ExportFormat) -> Result<ExportDocument, Error> {
        let records = self.repo.list().await.map_err(map_repository_error)?;
        export::render(&records, format)
    }
}

#[async_trait]
impl ForecastQuery for WeatherDeskService {
    async fn daily_forecast(&self, request: ForecastRequest) -> Result<ForecastReport, Error> {
        let geo = self
            .geocoder
            .resolve(&request.location)
            .await
            .map_err(map_geocoder_error)?;

        let samples = self
            .weather
            .five_day_forecast(geo.lat, geo.lon)
            .await
            .map_err(|err| {
                error!(error = %err, "forecast fetch failed");
                Error::internal("Forecast service failed")
            })?;

        Ok(ForecastReport {
            location_name: geo.name,
            lat: geo.lat,
            lon: geo.lon,
            days: aggregate_daily(&samples, &request.range),
        })
    }
}

#[async_trait]
impl Assistant for WeatherDeskService {
    async fn answer(&self, question: &str, context: &Value) -> Result<String, Error> {
        let prompt = question_prompt(question, context);
        let completion = self.advice.answer(&prompt).await.map_err(|err| {
            error!(error = %err, "assistant completion failed");
            Error::service_unavailable("AI service unavailable")
        })?;

        Ok(completion
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_ANSWER.to_owned()))
    }
}

#[cfg(test)]
#[path = "weather_desk_service_tests.rs"]
mod tests;
