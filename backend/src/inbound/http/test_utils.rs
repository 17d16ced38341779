//! Shared fixtures for endpoint tests: a fully wired fixture application
//! mirroring the production route table, minus the network.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::WeatherDeskService;
use crate::domain::ports::{
    FixtureAdviceSource, FixtureGeocoder, FixtureWeatherSource, InMemoryWeatherRequestRepository,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ask, error, forecast, health, requests};

/// State backed entirely by fixtures, with a working advice "credential".
pub fn fixture_state() -> HttpState {
    state_with_advice(FixtureAdviceSource::new())
}

/// State backed by fixtures with an explicit advice source, so tests can
/// drive the missing-credential path.
pub fn state_with_advice(advice: FixtureAdviceSource) -> HttpState {
    let service = Arc::new(WeatherDeskService::new(
        Arc::new(FixtureGeocoder),
        Arc::new(FixtureWeatherSource),
        Arc::new(advice),
        Arc::new(InMemoryWeatherRequestRepository::default()),
    ));
    HttpState::from_service(service)
}

/// Build an application with the production route table over the given state.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(
            web::scope("/api")
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
                .service(ask::ask_assistant),
        )
        .service(health::health)
}
