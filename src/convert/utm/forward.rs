use super::kruger::{WGS84, apply_series};
use super::{UtmProjection, central_meridian};
use crate::constants::{
    EQUATORIAL_RADIUS, FALSE_EASTING, FALSE_NORTHING, LATITUDE_BANDS, UTM_MAX_LATITUDE,
    UTM_MIN_LATITUDE, UTM_SCALE_FACTOR, ZONE_COUNT, ZONE_WIDTH,
};
use crate::error::{Error, Result};
use crate::types::{LatLng, Utm};
use std::f64::consts::PI;
use tracing::debug;

/// Project a coordinate onto the UTM grid
///
/// Implements Karney's transverse Mercator method with the order 8 Krüger
/// series, accurate to a few nanometers within 3900 km of the central
/// meridian. Besides the grid coordinate the result carries the meridian
/// convergence and point scale factor at the projected point.
///
/// Fails with [`Error::OutsideUtmLimits`] for latitudes outside the UTM
/// latitude bands (south of 80°S or north of 84°N).
pub fn project(lat_lng: &LatLng) -> Result<UtmProjection> {
    let latitude = lat_lng.latitude();
    let longitude = lat_lng.longitude();

    if !(UTM_MIN_LATITUDE..=UTM_MAX_LATITUDE).contains(&latitude) {
        return Err(Error::OutsideUtmLimits(latitude));
    }

    let band = latitude_band(latitude);
    let zone = adjust_zone(longitude_zone(longitude), band, longitude);

    let series = &*WGS84;
    let e = series.eccentricity;
    let a = series.rectifying_radius;

    // not `to_radians()`: its rounding moves the northing by one unit in the
    // ninth decimal (5819696.850323286 instead of ...285 for 52.516253°N)
    let phi = latitude * PI / 180.0;
    let lambda = longitude.to_radians() - central_meridian(zone);
    let (sin_lambda, cos_lambda) = lambda.sin_cos();

    // conformal latitude
    let tau = phi.tan();
    let sigma = (e * (e * tau / (1.0 + tau * tau).sqrt()).atanh()).sinh();
    let tau_prime = tau * (1.0 + sigma * sigma).sqrt() - sigma * (1.0 + tau * tau).sqrt();

    // Gauss-Schreiber ratios
    let xi_prime = tau_prime.atan2(cos_lambda);
    let eta_prime = (sin_lambda / (tau_prime * tau_prime + cos_lambda * cos_lambda).sqrt()).asinh();

    let (xi, eta) = apply_series(&series.alpha, xi_prime, eta_prime);

    let x = UTM_SCALE_FACTOR * a * eta;
    let y = UTM_SCALE_FACTOR * a * xi;

    let easting = x + FALSE_EASTING;
    let northing = if latitude < 0.0 { y + FALSE_NORTHING } else { y };

    // Karney 2011, eqs. 23 and 24
    let mut p_prime = 1.0;
    let mut q_prime = 0.0;
    for (j, alpha) in series.alpha.iter().enumerate() {
        let k = 2.0 * (j + 1) as f64;
        p_prime += k * alpha * (k * xi_prime).cos() * (k * eta_prime).cosh();
        q_prime += k * alpha * (k * xi_prime).sin() * (k * eta_prime).sinh();
    }

    let gamma_prime = (tau_prime / (1.0 + tau_prime * tau_prime).sqrt() * lambda.tan()).atan();
    let gamma_double_prime = q_prime.atan2(p_prime);
    let convergence = (gamma_prime + gamma_double_prime).to_degrees();

    // Karney 2011, eq. 25
    let sin_phi = phi.sin();
    let k_prime = (1.0 - e * e * sin_phi * sin_phi).sqrt() * (1.0 + tau * tau).sqrt()
        / (tau_prime * tau_prime + cos_lambda * cos_lambda).sqrt();
    let k_double_prime = a / EQUATORIAL_RADIUS * (p_prime * p_prime + q_prime * q_prime).sqrt();
    let scale = UTM_SCALE_FACTOR * k_prime * k_double_prime;

    Ok(UtmProjection {
        utm: Utm::new_unchecked(zone, band, easting, northing),
        convergence,
        scale,
    })
}

/// Latitude band letter, 8° per band from 80°S
///
/// `latitude` must already be within the UTM limits.
fn latitude_band(latitude: f64) -> char {
    let index = (latitude / 8.0 + 10.0).floor() as usize;
    char::from(LATITUDE_BANDS[index.min(LATITUDE_BANDS.len() - 1)])
}

/// Regular zone number, 6° per zone from 180°W
///
/// 180°E itself belongs to zone 60.
fn longitude_zone(longitude: f64) -> u8 {
    let zone = ((longitude + 180.0) / ZONE_WIDTH).floor() as u8 + 1;
    zone.min(ZONE_COUNT)
}

/// Apply the irregular zones around southwest Norway and Svalbard
fn adjust_zone(zone: u8, band: char, longitude: f64) -> u8 {
    let adjusted = match (zone, band) {
        (31, 'V') if longitude >= 3.0 => 32,
        (32, 'X') if longitude < 9.0 => 31,
        (32, 'X') => 33,
        (34, 'X') if longitude < 21.0 => 33,
        (34, 'X') => 35,
        (36, 'X') if longitude < 33.0 => 35,
        (36, 'X') => 37,
        _ => zone,
    };

    if adjusted != zone {
        debug!(zone, adjusted, %band, longitude, "Applied irregular UTM zone");
    }

    adjusted
}

impl TryFrom<LatLng> for Utm {
    type Error = Error;

    fn try_from(lat_lng: LatLng) -> Result<Self> {
        project(&lat_lng).map(|projection| projection.utm)
    }
}
