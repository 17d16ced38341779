//! Domain ports: traits the application service drives (outbound
//! collaborators) and the traits it implements for inbound adapters.
//!
//! Each driven port owns its request/response contract and error enum so the
//! service stays adapter-agnostic. Fixture implementations live beside the
//! ports for wiring without credentials and for endpoint tests.

pub mod advice_source;
pub mod assistant;
pub mod forecast_query;
pub mod geocoder;
pub mod request_directory;
pub mod weather_request_repository;
pub mod weather_source;

pub use advice_source::{AdviceSource, AdviceSourceError, FixtureAdviceSource};
pub use assistant::Assistant;
pub use forecast_query::{ForecastQuery, ForecastRequest};
pub use geocoder::{FixtureGeocoder, GeocodedLocation, Geocoder, GeocoderError};
pub use request_directory::RequestDirectory;
pub use weather_request_repository::{
    InMemoryWeatherRequestRepository, WeatherRequestRepository, WeatherRequestRepositoryError,
};
pub use weather_source::{
    CurrentConditions, FixtureWeatherSource, WeatherSource, WeatherSourceError,
};

#[cfg(test)]
pub use advice_source::MockAdviceSource;
#[cfg(test)]
pub use geocoder::MockGeocoder;
#[cfg(test)]
pub use weather_request_repository::MockWeatherRequestRepository;
#[cfg(test)]
pub use weather_source::MockWeatherSource;
