//! DTOs for decoding direct-geocoding responses.

use serde::Deserialize;

use crate::domain::ports::GeocodedLocation;

/// One match from the directory; the adapter requests `limit=1` so at most
/// one of these arrives.
#[derive(Debug, Deserialize)]
pub(super) struct GeoEntryDto {
    pub(super) name: String,
    pub(super) lat: f64,
    pub(super) lon: f64,
    pub(super) country: String,
}

impl GeoEntryDto {
    pub(super) fn into_domain(self) -> GeocodedLocation {
        GeocodedLocation {
            name: format!("{}, {}", self.name, self.country),
            lat: self.lat,
            lon: self.lon,
            country: self.country,
        }
    }
}
