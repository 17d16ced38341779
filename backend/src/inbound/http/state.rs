//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they depend only on
//! driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::WeatherDeskService;
use crate::domain::ports::{Assistant, ForecastQuery, RequestDirectory};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Record lifecycle use-cases.
    pub requests: Arc<dyn RequestDirectory>,
    /// Daily-forecast use-case.
    pub forecast: Arc<dyn ForecastQuery>,
    /// Interactive Q&A use-case.
    pub assistant: Arc<dyn Assistant>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        requests: Arc<dyn RequestDirectory>,
        forecast: Arc<dyn ForecastQuery>,
        assistant: Arc<dyn Assistant>,
    ) -> Self {
        Self {
            requests,
            forecast,
            assistant,
        }
    }

    /// Point every driving port at one application service instance.
    pub fn from_service(service: Arc<WeatherDeskService>) -> Self {
        Self {
            requests: service.clone(),
            forecast: service.clone(),
            assistant: service,
        }
    }
}
