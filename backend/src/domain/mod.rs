//! Domain: entities, pure algorithms, ports, and the application service.
//!
//! Everything here is transport agnostic. Inbound adapters translate HTTP
//! into these types; outbound adapters implement the driven ports.

pub mod advice;
pub mod error;
pub mod export;
pub mod forecast;
pub mod ports;
pub mod weather_desk_service;
pub mod weather_request;

pub use self::error::{Error, ErrorCode};
pub use self::forecast::{ForecastDay, ForecastReport, ForecastSample};
pub use self::weather_desk_service::WeatherDeskService;
pub use self::weather_request::{
    CreateWeatherRequest, DateRange, WeatherRequest, WeatherRequestPatch,
};

/// Convenient result alias for fallible domain operations.
pub type ApiResult<T> = Result<T, Error>;
