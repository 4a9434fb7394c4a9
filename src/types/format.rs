use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Representation a [`Coordinate`](crate::Coordinate) can be converted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateFormat {
    LatLng,
    Dms,
    Ddm,
    Utm,
    GeoHash,
}

impl CoordinateFormat {
    /// All supported formats
    pub const ALL: [CoordinateFormat; 5] = [
        CoordinateFormat::LatLng,
        CoordinateFormat::Dms,
        CoordinateFormat::Ddm,
        CoordinateFormat::Utm,
        CoordinateFormat::GeoHash,
    ];

    /// Short code, as accepted by `from_str`
    pub fn code(self) -> &'static str {
        match self {
            CoordinateFormat::LatLng => "LatLng",
            CoordinateFormat::Dms => "DMS",
            CoordinateFormat::Ddm => "DDM",
            CoordinateFormat::Utm => "UTM",
            CoordinateFormat::GeoHash => "GeoHash",
        }
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            CoordinateFormat::LatLng => "Latitude/Longitude",
            CoordinateFormat::Dms => "Degrees Minutes Seconds",
            CoordinateFormat::Ddm => "Degrees Decimal Minutes",
            CoordinateFormat::Utm => "Universal Transverse Mercator",
            CoordinateFormat::GeoHash => "Geohash",
        }
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CoordinateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoordinateFormat::ALL
            .into_iter()
            .find(|format| format.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}
