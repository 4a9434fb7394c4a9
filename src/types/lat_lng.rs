use crate::constants::DEFAULT_DECIMALS;
use crate::error::{Error, Result};
use crate::types::{LatitudeHemisphere, LongitudeHemisphere};
use crate::utils::{places, round_half_down};
use std::fmt;

/// Geographic coordinate in signed decimal degrees
///
/// This is the canonical representation: every other representation converts
/// to and from it. Latitude is positive north of the equator, longitude is
/// positive east of the prime meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    latitude: f64,
    longitude: f64,
}

impl LatLng {
    /// Create a coordinate from signed decimal degrees
    ///
    /// Fails if the latitude is outside -90..=90 or the longitude is outside
    /// -180..=180. Values are never clamped.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::LongitudeOutOfRange(longitude));
        }

        Ok(Self::new_unchecked(latitude, longitude))
    }

    /// Create a coordinate from values already known to be in range
    pub(crate) fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude_hemisphere(&self) -> LatitudeHemisphere {
        LatitudeHemisphere::of(self.latitude)
    }

    pub fn longitude_hemisphere(&self) -> LongitudeHemisphere {
        LongitudeHemisphere::of(self.longitude)
    }
}

/// Renders `52.516253° N 13.377625° E`
///
/// The formatter precision selects the number of decimal places (default 6).
/// Magnitudes are rounded half-down before printing.
impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DECIMALS);
        let latitude = round_half_down(self.latitude.abs(), places(precision));
        let longitude = round_half_down(self.longitude.abs(), places(precision));

        write!(
            f,
            "{latitude:.precision$}° {} {longitude:.precision$}° {}",
            self.latitude_hemisphere(),
            self.longitude_hemisphere(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_ok, assert_ok_eq};
    use insta::{assert_compact_debug_snapshot, assert_snapshot};

    #[test]
    fn construct_in_range() {
        let coordinate = assert_ok!(LatLng::new(10.0, 20.0));
        assert_eq!(coordinate.latitude(), 10.0);
        assert_eq!(coordinate.longitude(), 20.0);

        assert_ok!(LatLng::new(90.0, 180.0));
        assert_ok!(LatLng::new(-90.0, -180.0));
        assert_ok_eq!(LatLng::new(0.0, 0.0), LatLng::new_unchecked(0.0, 0.0));
    }

    #[test]
    fn construct_out_of_range() {
        assert_compact_debug_snapshot!(LatLng::new(90.5, 0.0), @"Err(LatitudeOutOfRange(90.5))");
        assert_compact_debug_snapshot!(LatLng::new(0.0, -180.1), @"Err(LongitudeOutOfRange(-180.1))");
        assert_compact_debug_snapshot!(LatLng::new(f64::NAN, 0.0), @"Err(LatitudeOutOfRange(NaN))");
    }

    #[test]
    fn display_default_precision() {
        let coordinate = LatLng::new(52.516_253_403_348_74, 13.377_625_381_177_886).unwrap();
        assert_snapshot!(coordinate, @"52.516253° N 13.377625° E");
    }

    #[test]
    fn display_southern_western() {
        let coordinate = LatLng::new(-33.868_8, -70.669_3).unwrap();
        assert_snapshot!(format!("{coordinate:.2}"), @"33.87° S 70.67° W");
    }

    #[test]
    fn display_zero_precision() {
        let coordinate = LatLng::new(52.516_253, 13.5).unwrap();
        assert_snapshot!(format!("{coordinate:.0}"), @"53° N 13° E");
    }
}
