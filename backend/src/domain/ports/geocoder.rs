//! Driven port for resolving free-text place names to coordinates.

use async_trait::async_trait;

/// A resolved location: canonical display name plus WGS84 coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    /// Canonical `"<name>, <country>"` display name.
    pub name: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// ISO country code reported by the directory.
    pub country: String,
}

/// Errors surfaced while resolving a place name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeocoderError {
    /// The directory returned zero matches for the query.
    #[error("no match for location query: {query}")]
    NoMatch { query: String },

    /// Network transport failed before a response arrived.
    #[error("geocoding transport failed: {message}")]
    Transport { message: String },

    /// The directory answered with a non-success status.
    #[error("geocoding upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("geocoding response decode failed: {message}")]
    Decode { message: String },
}

impl GeocoderError {
    /// Create a no-match error for the given query.
    pub fn no_match(query: impl Into<String>) -> Self {
        Self::NoMatch {
            query: query.into(),
        }
    }

    /// Create a transport error with the given message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a status error for a non-success upstream response.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error with the given message.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for the external place-name directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-text query to its single best match.
    async fn resolve(&self, query: &str) -> Result<GeocodedLocation, GeocoderError>;
}

/// Fixture geocoder returning a canned Toronto match.
///
/// The query `"atlantis"` (any casing) resolves to [`GeocoderError::NoMatch`]
/// so tests can drive the not-found path without a network.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGeocoder;

#[async_trait]
impl Geocoder for FixtureGeocoder {
    async fn resolve(&self, query: &str) -> Result<GeocodedLocation, GeocoderError> {
        if query.eq_ignore_ascii_case("atlantis") {
            return Err(GeocoderError::no_match(query));
        }
        Ok(GeocodedLocation {
            name: "Toronto, CA".to_owned(),
            lat: 43.6532,
            lon: -79.3832,
            country: "CA".to_owned(),
        })
    }
}
