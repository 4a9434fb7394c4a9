use crate::constants::DEFAULT_DECIMALS;
use crate::error::{Axis, Error, Result};
use crate::types::{LatitudeHemisphere, LongitudeHemisphere};
use crate::utils::{carry_sixty, places, round_half_down};
use std::fmt;

/// Coordinate in degrees and decimal minutes
///
/// Same sign convention as [`Dms`](crate::Dms): magnitudes only, the
/// hemispheres carry the sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ddm {
    degrees_lat: u8,
    minutes_lat: f64,
    hemisphere_lat: LatitudeHemisphere,
    degrees_lng: u8,
    minutes_lng: f64,
    hemisphere_lng: LongitudeHemisphere,
}

impl Ddm {
    /// Create a DDM coordinate from its components
    pub fn new(
        degrees_lat: u8,
        minutes_lat: f64,
        hemisphere_lat: LatitudeHemisphere,
        degrees_lng: u8,
        minutes_lng: f64,
        hemisphere_lng: LongitudeHemisphere,
    ) -> Result<Self> {
        validate_axis(Axis::Latitude, degrees_lat, minutes_lat)?;
        validate_axis(Axis::Longitude, degrees_lng, minutes_lng)?;

        Ok(Self::new_unchecked(
            degrees_lat,
            minutes_lat,
            hemisphere_lat,
            degrees_lng,
            minutes_lng,
            hemisphere_lng,
        ))
    }

    pub(crate) fn new_unchecked(
        degrees_lat: u8,
        minutes_lat: f64,
        hemisphere_lat: LatitudeHemisphere,
        degrees_lng: u8,
        minutes_lng: f64,
        hemisphere_lng: LongitudeHemisphere,
    ) -> Self {
        Self {
            degrees_lat,
            minutes_lat,
            hemisphere_lat,
            degrees_lng,
            minutes_lng,
            hemisphere_lng,
        }
    }

    pub fn degrees_lat(&self) -> u8 {
        self.degrees_lat
    }

    pub fn minutes_lat(&self) -> f64 {
        self.minutes_lat
    }

    pub fn hemisphere_lat(&self) -> LatitudeHemisphere {
        self.hemisphere_lat
    }

    pub fn degrees_lng(&self) -> u8 {
        self.degrees_lng
    }

    pub fn minutes_lng(&self) -> f64 {
        self.minutes_lng
    }

    pub fn hemisphere_lng(&self) -> LongitudeHemisphere {
        self.hemisphere_lng
    }
}

fn validate_axis(axis: Axis, degrees: u8, minutes: f64) -> Result<()> {
    let limit = match axis {
        Axis::Latitude => 90.0,
        Axis::Longitude => 180.0,
    };

    if !(0.0..60.0).contains(&minutes) {
        return Err(Error::MinutesOutOfRange(minutes));
    }

    let total = f64::from(degrees) + minutes / 60.0;
    if total > limit {
        return Err(Error::DegreesOutOfRange {
            axis,
            degrees: total,
        });
    }

    Ok(())
}

/// Renders `52°30.975204' N, 13°22.657523' E`
///
/// Precision handling and the alternate form match [`Dms`](crate::Dms), with
/// the minutes taking the place of the seconds. Minutes that print as 60
/// carry into the degrees.
impl fmt::Display for Ddm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (minutes_lat, minutes_lng, precision) = match f.precision() {
            Some(precision) => (
                round_half_down(self.minutes_lat, places(precision)),
                round_half_down(self.minutes_lng, places(precision)),
                precision,
            ),
            None => (self.minutes_lat, self.minutes_lng, DEFAULT_DECIMALS),
        };

        let (degrees_lat, minutes_lat) = carry_sixty(self.degrees_lat, minutes_lat, precision);
        let (degrees_lng, minutes_lng) = carry_sixty(self.degrees_lng, minutes_lng, precision);

        if f.alternate() {
            write!(
                f,
                "{}°{minutes_lat:.precision$}' {} {:03}°{minutes_lng:.precision$}' {}",
                degrees_lat, self.hemisphere_lat, degrees_lng, self.hemisphere_lng,
            )
        } else {
            write!(
                f,
                "{}°{minutes_lat:.precision$}' {}, {}°{minutes_lng:.precision$}' {}",
                degrees_lat, self.hemisphere_lat, degrees_lng, self.hemisphere_lng,
            )
        }
    }
}
