use crate::constants::DEFAULT_DECIMALS;
use crate::error::{Axis, Error, Result};
use crate::types::{LatitudeHemisphere, LongitudeHemisphere};
use crate::utils::{carry_sixty, places, round_half_down};
use std::fmt;

/// Coordinate in degrees, minutes and seconds
///
/// Degrees, minutes and seconds are non-negative magnitudes; the sign of each
/// axis is carried by its hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    degrees_lat: u8,
    minutes_lat: u8,
    seconds_lat: f64,
    hemisphere_lat: LatitudeHemisphere,
    degrees_lng: u8,
    minutes_lng: u8,
    seconds_lng: f64,
    hemisphere_lng: LongitudeHemisphere,
}

impl Dms {
    /// Create a DMS coordinate from its components
    ///
    /// Minutes must be below 60, seconds within `0..60`, and the resulting
    /// angles may not exceed 90° latitude or 180° longitude.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        degrees_lat: u8,
        minutes_lat: u8,
        seconds_lat: f64,
        hemisphere_lat: LatitudeHemisphere,
        degrees_lng: u8,
        minutes_lng: u8,
        seconds_lng: f64,
        hemisphere_lng: LongitudeHemisphere,
    ) -> Result<Self> {
        validate_axis(Axis::Latitude, degrees_lat, minutes_lat, seconds_lat)?;
        validate_axis(Axis::Longitude, degrees_lng, minutes_lng, seconds_lng)?;

        Ok(Self::new_unchecked(
            degrees_lat,
            minutes_lat,
            seconds_lat,
            hemisphere_lat,
            degrees_lng,
            minutes_lng,
            seconds_lng,
            hemisphere_lng,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_unchecked(
        degrees_lat: u8,
        minutes_lat: u8,
        seconds_lat: f64,
        hemisphere_lat: LatitudeHemisphere,
        degrees_lng: u8,
        minutes_lng: u8,
        seconds_lng: f64,
        hemisphere_lng: LongitudeHemisphere,
    ) -> Self {
        Self {
            degrees_lat,
            minutes_lat,
            seconds_lat,
            hemisphere_lat,
            degrees_lng,
            minutes_lng,
            seconds_lng,
            hemisphere_lng,
        }
    }

    pub fn degrees_lat(&self) -> u8 {
        self.degrees_lat
    }

    pub fn minutes_lat(&self) -> u8 {
        self.minutes_lat
    }

    pub fn seconds_lat(&self) -> f64 {
        self.seconds_lat
    }

    pub fn hemisphere_lat(&self) -> LatitudeHemisphere {
        self.hemisphere_lat
    }

    pub fn degrees_lng(&self) -> u8 {
        self.degrees_lng
    }

    pub fn minutes_lng(&self) -> u8 {
        self.minutes_lng
    }

    pub fn seconds_lng(&self) -> f64 {
        self.seconds_lng
    }

    pub fn hemisphere_lng(&self) -> LongitudeHemisphere {
        self.hemisphere_lng
    }
}

fn validate_axis(axis: Axis, degrees: u8, minutes: u8, seconds: f64) -> Result<()> {
    let limit = match axis {
        Axis::Latitude => 90.0,
        Axis::Longitude => 180.0,
    };

    if minutes >= 60 {
        return Err(Error::MinutesOutOfRange(f64::from(minutes)));
    }
    if !(0.0..60.0).contains(&seconds) {
        return Err(Error::SecondsOutOfRange(seconds));
    }

    let total = f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3600.0;
    if total > limit {
        return Err(Error::DegreesOutOfRange {
            axis,
            degrees: total,
        });
    }

    Ok(())
}

/// Renders `52°30'58.512252" N, 13°22'39.451372" E`
///
/// With a formatter precision the seconds are rounded half-down to that many
/// decimal places; without one they are printed with six decimals. The
/// alternate form (`{:#}`) drops the comma and pads the longitude degrees to
/// three digits: `52°30'58.512252" N 013°22'39.451372" E`.
///
/// Seconds that print as 60 carry into the minutes, and minutes into the
/// degrees, so `9°59'59.9999964"` at precision 0 renders as `10°0'0"`.
impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (seconds_lat, seconds_lng, precision) = match f.precision() {
            Some(precision) => (
                round_half_down(self.seconds_lat, places(precision)),
                round_half_down(self.seconds_lng, places(precision)),
                precision,
            ),
            None => (self.seconds_lat, self.seconds_lng, DEFAULT_DECIMALS),
        };

        let (degrees_lat, minutes_lat, seconds_lat) =
            carry(self.degrees_lat, self.minutes_lat, seconds_lat, precision);
        let (degrees_lng, minutes_lng, seconds_lng) =
            carry(self.degrees_lng, self.minutes_lng, seconds_lng, precision);

        if f.alternate() {
            write!(
                f,
                "{}°{}'{seconds_lat:.precision$}\" {} {:03}°{}'{seconds_lng:.precision$}\" {}",
                degrees_lat,
                minutes_lat,
                self.hemisphere_lat,
                degrees_lng,
                minutes_lng,
                self.hemisphere_lng,
            )
        } else {
            write!(
                f,
                "{}°{}'{seconds_lat:.precision$}\" {}, {}°{}'{seconds_lng:.precision$}\" {}",
                degrees_lat,
                minutes_lat,
                self.hemisphere_lat,
                degrees_lng,
                minutes_lng,
                self.hemisphere_lng,
            )
        }
    }
}

fn carry(degrees: u8, minutes: u8, seconds: f64, precision: usize) -> (u8, u8, f64) {
    let (minutes, seconds) = carry_sixty(minutes, seconds, precision);
    if minutes == 60 {
        (degrees.saturating_add(1), 0, seconds)
    } else {
        (degrees, minutes, seconds)
    }
}
