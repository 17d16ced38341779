//! Weather adapter for the external conditions/forecast provider.

mod dto;
mod http_source;

pub use http_source::OpenWeatherSource;
