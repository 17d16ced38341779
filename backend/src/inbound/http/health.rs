//! Health endpoint for load balancers and uptime checks.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of a successful health probe.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthBody {
    /// Always `true` while the process is serving traffic.
    pub ok: bool,
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is alive", body = HealthBody)),
    tags = ["health"],
    operation_id = "health"
)]
#[get("/health")]
pub async fn health() -> web::Json<HealthBody> {
    web::Json(HealthBody { ok: true })
}
