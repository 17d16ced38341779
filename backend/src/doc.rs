//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every HTTP endpoint plus the schema wrappers that
//! document domain types without coupling them to utoipa. The generated
//! specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::ask::{AskRequestBody, AskResponseBody};
use crate::inbound::http::health::HealthBody;
use crate::inbound::http::requests::{CreateRequestBody, UpdateRequestBody};
use crate::inbound::http::schemas::{
    ErrorSchema, ForecastDaySchema, ForecastReportSchema, WeatherRequestSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather desk API",
        description = "Location lookups, daily forecasts, and AI travel advice."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::requests::create_request,
        crate::inbound::http::requests::list_requests,
        crate::inbound::http::requests::export_requests,
        crate::inbound::http::requests::get_request,
        crate::inbound::http::requests::update_request,
        crate::inbound::http::requests::delete_request,
        crate::inbound::http::requests::delete_all_requests,
        crate::inbound::http::forecast::get_forecast,
        crate::inbound::http::ask::ask_assistant,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        ErrorSchema,
        WeatherRequestSchema,
        ForecastDaySchema,
        ForecastReportSchema,
        CreateRequestBody,
        UpdateRequestBody,
        AskRequestBody,
        AskResponseBody,
        HealthBody,
    )),
    tags(
        (name = "requests", description = "Lookup record lifecycle and export"),
        (name = "forecast", description = "Aggregated daily forecasts"),
        (name = "ask", description = "Interactive weather Q&A"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
