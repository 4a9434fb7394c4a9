use crate::convert::{geohash, sexagesimal, utm};
use crate::error::Result;
use crate::types::{CoordinateFormat, Ddm, Dms, GeoHash, LatLng, Utm};
use std::fmt;

/// A coordinate in any of the supported representations
///
/// Conversions never modify a value; [`convert`](Coordinate::convert) returns
/// a new `Coordinate` of the requested kind. Pairs without a direct converter
/// (e.g. DMS to UTM) are routed through [`LatLng`].
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinate {
    LatLng(LatLng),
    Dms(Dms),
    Ddm(Ddm),
    Utm(Utm),
    GeoHash(GeoHash),
}

impl Coordinate {
    /// Create a coordinate from signed decimal degrees
    pub fn lat_lng(latitude: f64, longitude: f64) -> Result<Self> {
        LatLng::new(latitude, longitude).map(Self::LatLng)
    }

    /// Create a UTM coordinate from its components
    pub fn utm(zone: u8, band: char, easting: f64, northing: f64) -> Result<Self> {
        Utm::new(zone, band, easting, northing).map(Self::Utm)
    }

    /// Parse a UTM coordinate like `33U 389912.653 5819696.850`
    pub fn from_utm(s: &str) -> Result<Self> {
        s.parse().map(Self::Utm)
    }

    pub fn geohash(hash: &str) -> Result<Self> {
        GeoHash::new(hash).map(Self::GeoHash)
    }

    /// Representation of the wrapped value
    pub fn kind(&self) -> CoordinateFormat {
        match self {
            Self::LatLng(_) => CoordinateFormat::LatLng,
            Self::Dms(_) => CoordinateFormat::Dms,
            Self::Ddm(_) => CoordinateFormat::Ddm,
            Self::Utm(_) => CoordinateFormat::Utm,
            Self::GeoHash(_) => CoordinateFormat::GeoHash,
        }
    }

    /// Latitude and longitude of the wrapped value
    ///
    /// Only a UTM value can fail, if the inverse projection does not converge.
    pub fn to_lat_lng(&self) -> Result<LatLng> {
        match self {
            Self::LatLng(lat_lng) => Ok(*lat_lng),
            Self::Dms(dms) => Ok(sexagesimal::from_dms(dms)),
            Self::Ddm(ddm) => Ok(sexagesimal::from_ddm(ddm)),
            Self::Utm(grid) => utm::unproject(grid),
            Self::GeoHash(hash) => Ok(geohash::decode(hash)),
        }
    }

    /// Convert to another representation
    ///
    /// Converting to the current representation returns an identical copy.
    /// Converting to UTM fails outside the UTM latitude bands.
    pub fn convert(&self, target: CoordinateFormat) -> Result<Coordinate> {
        if self.kind() == target {
            return Ok(self.clone());
        }

        let lat_lng = self.to_lat_lng()?;
        Ok(match target {
            CoordinateFormat::LatLng => Self::LatLng(lat_lng),
            CoordinateFormat::Dms => Self::Dms(sexagesimal::to_dms(&lat_lng)),
            CoordinateFormat::Ddm => Self::Ddm(sexagesimal::to_ddm(&lat_lng)),
            CoordinateFormat::Utm => Self::Utm(utm::project(&lat_lng)?.utm),
            CoordinateFormat::GeoHash => Self::GeoHash(geohash::encode(&lat_lng)),
        })
    }

    /// Convert to `target` and render it
    ///
    /// `precision` is the number of decimal places, or the number of
    /// characters for a geohash. `None` selects the default of the target
    /// representation.
    pub fn format(&self, target: CoordinateFormat, precision: Option<usize>) -> Result<String> {
        let coordinate = self.convert(target)?;
        Ok(match precision {
            Some(precision) => format!("{coordinate:.precision$}"),
            None => coordinate.to_string(),
        })
    }
}

impl From<LatLng> for Coordinate {
    fn from(lat_lng: LatLng) -> Self {
        Self::LatLng(lat_lng)
    }
}

impl From<Dms> for Coordinate {
    fn from(dms: Dms) -> Self {
        Self::Dms(dms)
    }
}

impl From<Ddm> for Coordinate {
    fn from(ddm: Ddm) -> Self {
        Self::Ddm(ddm)
    }
}

impl From<Utm> for Coordinate {
    fn from(utm: Utm) -> Self {
        Self::Utm(utm)
    }
}

impl From<GeoHash> for Coordinate {
    fn from(hash: GeoHash) -> Self {
        Self::GeoHash(hash)
    }
}

/// Forwards to the wrapped value, keeping precision and alternate flags
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LatLng(lat_lng) => fmt::Display::fmt(lat_lng, f),
            Self::Dms(dms) => fmt::Display::fmt(dms, f),
            Self::Ddm(ddm) => fmt::Display::fmt(ddm, f),
            Self::Utm(utm) => fmt::Display::fmt(utm, f),
            Self::GeoHash(hash) => fmt::Display::fmt(hash, f),
        }
    }
}
