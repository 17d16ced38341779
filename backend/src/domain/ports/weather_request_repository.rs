//! Driven port for durable storage of lookup records.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{WeatherRequest, WeatherRequestPatch};

/// Errors surfaced by the persistence adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeatherRequestRepositoryError {
    /// The backing store could not be reached.
    #[error("repository connection failed: {message}")]
    Connection { message: String },

    /// A query failed inside the store.
    #[error("repository query failed: {message}")]
    Query { message: String },
}

impl WeatherRequestRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for the record store.
///
/// Absence is modelled in the return types (`Option` / `bool`) rather than
/// as an error; the service layer decides what absence means per operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherRequestRepository: Send + Sync {
    /// Persist one new record.
    async fn insert(&self, record: &WeatherRequest) -> Result<(), WeatherRequestRepositoryError>;

    /// All records, newest first.
    async fn list(&self) -> Result<Vec<WeatherRequest>, WeatherRequestRepositoryError>;

    /// One record by id, `None` when absent.
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<WeatherRequest>, WeatherRequestRepositoryError>;

    /// Apply a partial update, returning the updated record or `None` when
    /// the id does not exist.
    async fn update(
        &self,
        id: Uuid,
        patch: WeatherRequestPatch,
    ) -> Result<Option<WeatherRequest>, WeatherRequestRepositoryError>;

    /// Delete one record; `false` when the id does not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, WeatherRequestRepositoryError>;

    /// Delete every record, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, WeatherRequestRepositoryError>;
}

/// In-memory repository used when no database is configured and by endpoint
/// tests.
#[derive(Debug, Default)]
pub struct InMemoryWeatherRequestRepository {
    records: Mutex<Vec<WeatherRequest>>,
}

impl InMemoryWeatherRequestRepository {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<WeatherRequest>>, WeatherRequestRepositoryError> {
        self.records
            .lock()
            .map_err(|_| WeatherRequestRepositoryError::connection("record store poisoned"))
    }
}

#[async_trait]
impl WeatherRequestRepository for InMemoryWeatherRequestRepository {
    async fn insert(&self, record: &WeatherRequest) -> Result<(), WeatherRequestRepositoryError> {
        self.lock()?.push(record.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<WeatherRequest>, WeatherRequestRepositoryError> {
        let mut records = self.lock()?.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<WeatherRequest>, WeatherRequestRepositoryError> {
        Ok(self.lock()?.iter().find(|r| r.id == id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        patch: WeatherRequestPatch,
    ) -> Result<Option<WeatherRequest>, WeatherRequestRepositoryError> {
        let mut records = self.lock()?;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        patch.apply(record);
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, WeatherRequestRepositoryError> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, WeatherRequestRepositoryError> {
        let mut records = self.lock()?;
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }
}
