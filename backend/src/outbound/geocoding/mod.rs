//! Geocoding adapter for the external place-name directory.

mod dto;
mod http_source;

pub use http_source::OpenWeatherGeocoder;
