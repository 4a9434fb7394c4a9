use crate::constants::{DEFAULT_UTM_DECIMALS, FIRST_NORTHERN_BAND, LATITUDE_BANDS, ZONE_COUNT};
use crate::error::{Error, Result};
use crate::utils::{places, round_half_down};
use std::fmt;
use std::str::FromStr;

/// Universal Transverse Mercator grid coordinate
///
/// `easting` includes the 500 000 m false easting, `northing` includes the
/// 10 000 000 m false northing for points in the southern hemisphere. The
/// latitude band letter selects the hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utm {
    zone: u8,
    band: char,
    easting: f64,
    northing: f64,
}

impl Utm {
    /// Create a grid coordinate, validating zone and band
    pub fn new(zone: u8, band: char, easting: f64, northing: f64) -> Result<Self> {
        if !(1..=ZONE_COUNT).contains(&zone) {
            return Err(Error::InvalidZone(zone));
        }
        let band = band.to_ascii_uppercase();
        band_index(band)?;
        if !easting.is_finite() {
            return Err(Error::InvalidGridValue(easting));
        }
        if !northing.is_finite() {
            return Err(Error::InvalidGridValue(northing));
        }

        Ok(Self::new_unchecked(zone, band, easting, northing))
    }

    pub(crate) fn new_unchecked(zone: u8, band: char, easting: f64, northing: f64) -> Self {
        Self {
            zone,
            band,
            easting,
            northing,
        }
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn band(&self) -> char {
        self.band
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Whether the band letter lies south of the equator (bands `C` to `M`)
    pub fn is_southern(&self) -> bool {
        band_index(self.band).is_ok_and(|index| index < FIRST_NORTHERN_BAND)
    }
}

/// Index of a band letter in the latitude band table
fn band_index(band: char) -> Result<usize> {
    u8::try_from(band)
        .ok()
        .and_then(|byte| LATITUDE_BANDS.iter().position(|&b| b == byte))
        .ok_or(Error::InvalidLatitudeBand(band))
}

/// Parses `"33U 389912.653 5819696.850"`
///
/// The first token is the zone number directly followed by the band letter,
/// then easting and northing separated by whitespace.
impl FromStr for Utm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidUtmString(s.to_string());

        let mut parts = s.split_whitespace();
        let (Some(grid_zone), Some(easting), Some(northing), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let band = grid_zone.chars().last().ok_or_else(invalid)?;
        let zone = grid_zone[..grid_zone.len() - band.len_utf8()]
            .parse::<u8>()
            .map_err(|_| invalid())?;
        let easting = easting.parse::<f64>().map_err(|_| invalid())?;
        let northing = northing.parse::<f64>().map_err(|_| invalid())?;

        Self::new(zone, band, easting, northing)
    }
}

/// Renders `33U 389912.653201401 5819696.850323285`
///
/// The formatter precision selects the decimal places of easting and northing
/// (default 9), rounded half-down.
impl fmt::Display for Utm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_UTM_DECIMALS);
        let easting = round_half_down(self.easting, places(precision));
        let northing = round_half_down(self.northing, places(precision));

        write!(
            f,
            "{}{} {easting:.precision$} {northing:.precision$}",
            self.zone, self.band
        )
    }
}
