/// Axis of a geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Errors returned when constructing or converting coordinates
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Latitude out of range: {0} (expected -90..=90)")]
    LatitudeOutOfRange(f64),

    #[error("Longitude out of range: {0} (expected -180..=180)")]
    LongitudeOutOfRange(f64),

    #[error("Degrees out of range for {axis}: {degrees}")]
    DegreesOutOfRange { axis: Axis, degrees: f64 },

    #[error("Minutes out of range: {0} (expected 0..60)")]
    MinutesOutOfRange(f64),

    #[error("Seconds out of range: {0} (expected 0..60)")]
    SecondsOutOfRange(f64),

    #[error("Invalid hemisphere letter: {0:?}")]
    InvalidHemisphere(char),

    #[error("Invalid UTM zone: {0} (expected 1..=60)")]
    InvalidZone(u8),

    #[error("Invalid UTM latitude band: {0:?}")]
    InvalidLatitudeBand(char),

    #[error("Latitude {0} is outside the UTM latitude bands (-80..=84)")]
    OutsideUtmLimits(f64),

    #[error("Invalid UTM grid value: {0}")]
    InvalidGridValue(f64),

    #[error("Invalid geohash character {character:?} at position {position}")]
    InvalidGeoHashCharacter { character: char, position: usize },

    #[error("Geohash too long: {0} characters (at most 12 supported)")]
    GeoHashTooLong(usize),

    #[error("Invalid UTM string: {0:?}")]
    InvalidUtmString(String),

    #[error("Unknown coordinate format: {0:?}")]
    UnknownFormat(String),

    #[error("Inverse projection did not converge after {iterations} iterations")]
    NoConvergence { iterations: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
