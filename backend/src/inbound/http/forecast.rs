//! Daily-forecast HTTP handler.
//!
//! ```text
//! GET /api/forecast?location=&startDate=&endDate=
//! ```

use actix_web::{get, web};
use serde::Deserialize;

use crate::domain::ports::ForecastRequest;
use crate::domain::{ApiResult, DateRange, ForecastReport};
use crate::inbound::http::schemas::{ErrorSchema, ForecastReportSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_date, require_text};

/// Query parameters of the forecast endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastParams {
    /// Free-text location query.
    pub location: Option<String>,
    /// First day of the range (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Last day of the range (`YYYY-MM-DD`).
    pub end_date: Option<String>,
}

/// Resolve a location and return its aggregated daily forecast.
#[utoipa::path(
    get,
    path = "/api/forecast",
    params(
        ("location" = String, Query, description = "Free-text place name"),
        ("startDate" = String, Query, description = "Range start, YYYY-MM-DD"),
        ("endDate" = String, Query, description = "Range end, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Aggregated daily forecast", body = ForecastReportSchema),
        (status = 400, description = "Missing or invalid parameters", body = ErrorSchema),
        (status = 404, description = "Location not found", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["forecast"],
    operation_id = "getForecast"
)]
#[get("/forecast")]
pub async fn get_forecast(
    state: web::Data<HttpState>,
    params: web::Query<ForecastParams>,
) -> ApiResult<web::Json<ForecastReport>> {
    let params = params.into_inner();
    let location = require_text(params.location.as_deref(), FieldName::new("location"))?;
    let start = parse_date(
        require_text(params.start_date.as_deref(), FieldName::new("startDate"))?,
        FieldName::new("startDate"),
    )?;
    let end = parse_date(
        require_text(params.end_date.as_deref(), FieldName::new("endDate"))?,
        FieldName::new("endDate"),
    )?;

    let report = state
        .forecast
        .daily_forecast(ForecastRequest {
            location: location.to_owned(),
            range: DateRange::new(start, end)?,
        })
        .await?;
    Ok(web::Json(report))
}

#[cfg(test)]
#[path = "forecast_tests.rs"]
mod tests;
