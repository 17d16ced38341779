//! Lookup-record HTTP handlers.
//!
//! ```text
//! POST   /api/requests
//! GET    /api/requests
//! GET    /api/requests/export
//! GET    /api/requests/{id}
//! PUT    /api/requests/{id}
//! DELETE /api/requests/{id}
//! DELETE /api/requests
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::export::ExportFormat;
use crate::domain::{ApiResult, CreateWeatherRequest, WeatherRequest, WeatherRequestPatch};
use crate::inbound::http::schemas::{ErrorSchema, WeatherRequestSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, double_option, parse_date, require_text};

/// Request payload for creating a lookup record.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestBody {
    /// Free-text location query.
    pub location: Option<String>,
    /// First day of the range (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Last day of the range (`YYYY-MM-DD`).
    pub end_date: Option<String>,
}

/// Partial update payload; only supplied fields change.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestBody {
    /// New location text, overwriting raw and canonical names alike.
    pub location: Option<String>,
    /// New latitude.
    pub lat: Option<f64>,
    /// New longitude.
    pub lon: Option<f64>,
    /// New range start (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// New range end (`YYYY-MM-DD`).
    pub end_date: Option<String>,
    /// Replacement weather snapshot.
    #[schema(value_type = Object)]
    pub weather_data: Option<Value>,
    /// New advice text; explicit `null` clears the stored advice.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub ai_advice: Option<Option<String>>,
    /// Replacement derived metadata.
    #[schema(value_type = Object)]
    pub extra_data: Option<Value>,
}

/// Query parameters of the export endpoint.
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// Requested format; defaults to `json`.
    pub format: Option<String>,
}

fn parse_patch(body: UpdateRequestBody) -> ApiResult<WeatherRequestPatch> {
    let start_date = body
        .start_date
        .as_deref()
        .map(|raw| parse_date(raw, FieldName::new("startDate")))
        .transpose()?;
    let end_date = body
        .end_date
        .as_deref()
        .map(|raw| parse_date(raw, FieldName::new("endDate")))
        .transpose()?;

    Ok(WeatherRequestPatch {
        // Blank location text is ignored rather than rejected, matching the
        // create endpoint's trim-then-check handling of the same field.
        location: body
            .location
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_owned),
        lat: body.lat,
        lon: body.lon,
        start_date,
        end_date,
        weather_data: body.weather_data,
        ai_advice: body.ai_advice,
        extra_data: body.extra_data,
    })
}

/// Create a lookup record: geocode, fetch weather, generate advice, persist.
#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = CreateRequestBody,
    responses(
        (status = 201, description = "Record created", body = WeatherRequestSchema),
        (status = 400, description = "Invalid input", body = ErrorSchema),
        (status = 404, description = "Location not found", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "createRequest"
)]
#[post("/requests")]
pub async fn create_request(
    state: web::Data<HttpState>,
    body: web::Json<CreateRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    let location = require_text(body.location.as_deref(), FieldName::new("location"))?;
    let start = parse_date(
        require_text(body.start_date.as_deref(), FieldName::new("startDate"))?,
        FieldName::new("startDate"),
    )?;
    let end = parse_date(
        require_text(body.end_date.as_deref(), FieldName::new("endDate"))?,
        FieldName::new("endDate"),
    )?;

    let input = CreateWeatherRequest::new(location, start, end)?;
    let record = state.requests.create(input).await?;
    Ok(HttpResponse::Created().json(record))
}

/// List all records, newest first.
#[utoipa::path(
    get,
    path = "/api/requests",
    responses((status = 200, description = "All records", body = [WeatherRequestSchema])),
    tags = ["requests"],
    operation_id = "listRequests"
)]
#[get("/requests")]
pub async fn list_requests(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<WeatherRequest>>> {
    Ok(web::Json(state.requests.list().await?))
}

/// Export the full listing as JSON, CSV, or Markdown.
#[utoipa::path(
    get,
    path = "/api/requests/export",
    params(("format" = Option<String>, Query, description = "json | csv | md")),
    responses(
        (status = 200, description = "Rendered export"),
        (status = 400, description = "Unknown format", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "exportRequests"
)]
#[get("/requests/export")]
pub async fn export_requests(
    state: web::Data<HttpState>,
    params: web::Query<ExportParams>,
) -> ApiResult<HttpResponse> {
    let format: ExportFormat = params.format.as_deref().unwrap_or("json").parse()?;
    let document = state.requests.export(format).await?;
    Ok(HttpResponse::Ok()
        .content_type(document.content_type)
        .body(document.body))
}

/// Fetch one record by id.
#[utoipa::path(
    get,
    path = "/api/requests/{id}",
    params(("id" = Uuid, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "The record", body = WeatherRequestSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such record", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "getRequest"
)]
#[get("/requests/{id}")]
pub async fn get_request(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<WeatherRequest>> {
    Ok(web::Json(state.requests.get(id.into_inner()).await?))
}

/// Partially update one record.
#[utoipa::path(
    put,
    path = "/api/requests/{id}",
    params(("id" = Uuid, Path, description = "Record identifier")),
    request_body = UpdateRequestBody,
    responses(
        (status = 200, description = "Updated record", body = WeatherRequestSchema),
        (status = 400, description = "Invalid patch", body = ErrorSchema),
        (status = 404, description = "No such record", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "updateRequest"
)]
#[put("/requests/{id}")]
pub async fn update_request(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    body: web::Json<UpdateRequestBody>,
) -> ApiResult<web::Json<WeatherRequest>> {
    let patch = parse_patch(body.into_inner())?;
    Ok(web::Json(
        state.requests.update(id.into_inner(), patch).await?,
    ))
}

/// Delete one record.
#[utoipa::path(
    delete,
    path = "/api/requests/{id}",
    params(("id" = Uuid, Path, description = "Record identifier")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 404, description = "No such record", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "deleteRequest"
)]
#[delete("/requests/{id}")]
pub async fn delete_request(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state.requests.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete every record, with no confirmation step.
#[utoipa::path(
    delete,
    path = "/api/requests",
    responses((status = 204, description = "All records deleted")),
    tags = ["requests"],
    operation_id = "deleteAllRequests"
)]
#[delete("/requests")]
pub async fn delete_all_requests(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state.requests.delete_all().await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "requests_tests.rs"]
mod tests;
