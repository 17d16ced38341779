//! Diesel row types mapping between the schema and domain records.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{WeatherRequest, WeatherRequestPatch};

use super::schema::weather_requests;

/// Row read back from `weather_requests`.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = weather_requests, check_for_backend(diesel::pg::Pg))]
pub struct WeatherRequestRow {
    pub id: Uuid,
    pub location_raw: String,
    pub location_name: String,
    pub lat: f64,
    pub lon: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weather_data: Value,
    pub ai_advice: Option<String>,
    pub extra_data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl From<WeatherRequestRow> for WeatherRequest {
    fn from(row: WeatherRequestRow) -> Self {
        Self {
            id: row.id,
            location_raw: row.location_raw,
            location_name: row.location_name,
            lat: row.lat,
            lon: row.lon,
            start_date: row.start_date,
            end_date: row.end_date,
            weather_data: row.weather_data,
            ai_advice: row.ai_advice,
            extra_data: row.extra_data,
            created_at: row.created_at,
        }
    }
}

/// Insertable row for a new record.
#[derive(Debug, Insertable)]
#[diesel(table_name = weather_requests)]
pub struct NewWeatherRequestRow {
    pub id: Uuid,
    pub location_raw: String,
    pub location_name: String,
    pub lat: f64,
    pub lon: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weather_data: Value,
    pub ai_advice: Option<String>,
    pub extra_data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl From<&WeatherRequest> for NewWeatherRequestRow {
    fn from(record: &WeatherRequest) -> Self {
        Self {
            id: record.id,
            location_raw: record.location_raw.clone(),
            location_name: record.location_name.clone(),
            lat: record.lat,
            lon: record.lon,
            start_date: record.start_date,
            end_date: record.end_date,
            weather_data: record.weather_data.clone(),
            ai_advice: record.ai_advice.clone(),
            extra_data: record.extra_data.clone(),
            created_at: record.created_at,
        }
    }
}

/// Changeset for partial updates: `None` fields are left untouched, while
/// `ai_advice: Some(None)` writes an SQL NULL.
#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = weather_requests)]
pub struct WeatherRequestChangeset {
    pub location_raw: Option<String>,
    pub location_name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub weather_data: Option<Value>,
    pub ai_advice: Option<Option<String>>,
    pub extra_data: Option<Value>,
}

impl From<WeatherRequestPatch> for WeatherRequestChangeset {
    fn from(patch: WeatherRequestPatch) -> Self {
        Self {
            // Supplied location text overwrites both name columns.
            location_raw: patch.location.clone(),
            location_name: patch.location,
            lat: patch.lat,
            lon: patch.lon,
            start_date: patch.start_date,
            end_date: patch.end_date,
            weather_data: patch.weather_data,
            ai_advice: patch.ai_advice,
            extra_data: patch.extra_data,
        }
    }
}
