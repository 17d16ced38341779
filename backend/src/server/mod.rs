//! Server construction and wiring.
//!
//! Builds the port implementations the configuration allows for (real HTTP
//! and Diesel adapters when credentials and a database are present, fixtures
//! otherwise), assembles the application service, and spawns the Actix
//! server.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::warn;

use crate::domain::WeatherDeskService;
use crate::domain::ports::{
    FixtureGeocoder, FixtureWeatherSource, Geocoder, InMemoryWeatherRequestRepository,
    WeatherRequestRepository, WeatherSource,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ask, error, forecast, health, requests};
use crate::middleware::Trace;
use crate::outbound::geocoding::OpenWeatherGeocoder;
use crate::outbound::openai::OpenAiAdviceSource;
use crate::outbound::persistence::DieselWeatherRequestRepository;
use crate::outbound::weather::OpenWeatherSource;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let repo: Arc<dyn WeatherRequestRepository> = match &config.db_pool {
        Some(pool) => Arc::new(DieselWeatherRequestRepository::new(pool.clone())),
        None => {
            warn!("no database configured, keeping records in memory");
            Arc::new(InMemoryWeatherRequestRepository::default())
        }
    };

    let (geocoder, weather): (Arc<dyn Geocoder>, Arc<dyn WeatherSource>) =
        match &config.openweather_api_key {
            Some(key) => (
                Arc::new(
                    OpenWeatherGeocoder::new(key.clone()).map_err(std::io::Error::other)?,
                ),
                Arc::new(OpenWeatherSource::new(key.clone()).map_err(std::io::Error::other)?),
            ),
            None => {
                warn!("OPENWEATHER_API_KEY not set, serving fixture geocoding and weather");
                (Arc::new(FixtureGeocoder), Arc::new(FixtureWeatherSource))
            }
        };

    let advice = OpenAiAdviceSource::new(config.openai_api_key.clone());
    if !advice.has_credential() {
        warn!("OPENAI_API_KEY not set, records will carry no advice and /api/ask will report 503");
    }

    let service = Arc::new(WeatherDeskService::new(
        geocoder,
        weather,
        Arc::new(advice),
        repo,
    ));
    Ok(HttpState::from_service(service))
}

fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(requests::create_request)
        .service(requests::list_requests)
        // `/requests/export` must be registered ahead of the
        // `/requests/{id}` routes so "export" is not read as an id.
        .service(requests::export_requests)
        .service(requests::get_request)
        .service(requests::update_request)
        .service(requests::delete_request)
        .service(requests::delete_all_requests)
        .service(forecast::get_forecast)
        .service(ask::ask_assistant);

    let app = App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .wrap(Trace)
        .service(api)
        .service(health::health);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when an outbound adapter cannot be built or
/// the socket cannot be bound.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let state = web::Data::new(build_http_state(&config)?);
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr)?
        .run();
    Ok(server)
}
