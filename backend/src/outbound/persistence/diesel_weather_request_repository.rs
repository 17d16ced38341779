//! PostgreSQL-backed `WeatherRequestRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{WeatherRequestRepository, WeatherRequestRepositoryError};
use crate::domain::{WeatherRequest, WeatherRequestPatch};

use super::models::{NewWeatherRequestRow, WeatherRequestChangeset, WeatherRequestRow};
use super::pool::{DbPool, PoolError};
use super::schema::weather_requests;

/// Diesel-backed implementation of the record store port.
#[derive(Clone)]
pub struct DieselWeatherRequestRepository {
    pool: DbPool,
}

impl DieselWeatherRequestRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> WeatherRequestRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            WeatherRequestRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> WeatherRequestRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            WeatherRequestRepositoryError::connection("database connection error")
        }
        _ => WeatherRequestRepositoryError::query("database error"),
    }
}

#[async_trait]
impl WeatherRequestRepository for DieselWeatherRequestRepository {
    async fn insert(&self, record: &WeatherRequest) -> Result<(), WeatherRequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(weather_requests::table)
            .values(NewWeatherRequestRow::from(record))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<WeatherRequest>, WeatherRequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<WeatherRequestRow> = weather_requests::table
            .order(weather_requests::created_at.desc())
            .select(WeatherRequestRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(WeatherRequest::from).collect())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<WeatherRequest>, WeatherRequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WeatherRequestRow> = weather_requests::table
            .find(id)
            .select(WeatherRequestRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(WeatherRequest::from))
    }

    async fn update(
        &self,
        id: Uuid,
        patch: WeatherRequestPatch,
    ) -> Result<Option<WeatherRequest>, WeatherRequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WeatherRequestRow> = diesel::update(weather_requests::table.find(id))
            .set(WeatherRequestChangeset::from(patch))
            .returning(WeatherRequestRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(WeatherRequest::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, WeatherRequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(weather_requests::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }

    async fn delete_all(&self) -> Result<u64, WeatherRequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(weather_requests::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed as u64)
    }
}
