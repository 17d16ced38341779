//! Driving port for the lookup-record lifecycle.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::export::{ExportDocument, ExportFormat};
use crate::domain::{CreateWeatherRequest, Error, WeatherRequest, WeatherRequestPatch};

/// Use-cases over persisted lookup records, consumed by the HTTP adapter.
#[async_trait]
pub trait RequestDirectory: Send + Sync {
    /// Run the full creation chain (geocode, weather fetch, advice) and
    /// persist one new record.
    async fn create(&self, input: CreateWeatherRequest) -> Result<WeatherRequest, Error>;

    /// All records, newest first.
    async fn list(&self) -> Result<Vec<WeatherRequest>, Error>;

    /// One record by id.
    async fn get(&self, id: Uuid) -> Result<WeatherRequest, Error>;

    /// Apply a partial update.
    async fn update(&self, id: Uuid, patch: WeatherRequestPatch) -> Result<WeatherRequest, Error>;

    /// Delete one record.
    async fn delete(&self, id: Uuid) -> Result<(), Error>;

    /// Delete every record.
    async fn delete_all(&self) -> Result<(), Error>;

    /// Render the full listing in the requested format.
    async fn export(&self, format: ExportFormat) -> Result<ExportDocument, Error>;
}
