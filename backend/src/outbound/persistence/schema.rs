//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match the migrations exactly; regenerate with `diesel print-schema`
//! after schema changes.

diesel::table! {
    /// Completed lookups: inputs, fetched weather snapshot, generated advice.
    weather_requests (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Original user-entered location text.
        location_raw -> Varchar,
        /// Canonical "City, Country" name from geocoding.
        location_name -> Varchar,
        /// Latitude in WGS84.
        lat -> Float8,
        /// Longitude in WGS84.
        lon -> Float8,
        /// First day of the requested range.
        start_date -> Date,
        /// Last day of the requested range.
        end_date -> Date,
        /// Opaque weather provider snapshot.
        weather_data -> Jsonb,
        /// Advice text, null when no credential was configured.
        ai_advice -> Nullable<Text>,
        /// Derived links computed from the coordinates.
        extra_data -> Nullable<Jsonb>,
        /// Record creation timestamp, the listing sort key.
        created_at -> Timestamptz,
    }
}
