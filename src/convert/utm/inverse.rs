use super::central_meridian;
use super::kruger::{WGS84, apply_series};
use crate::constants::{FALSE_EASTING, FALSE_NORTHING, UTM_SCALE_FACTOR};
use crate::error::{Error, Result};
use crate::types::{LatLng, Utm};
use tracing::{trace, warn};

/// Upper bound on Newton-Raphson steps when recovering the latitude
pub const MAX_ITERATIONS: usize = 100;

/// Convergence threshold on the change of `tan(latitude)` per step
const TOLERANCE: f64 = 1e-12;

/// Convert a UTM grid coordinate back to latitude and longitude
///
/// The band letter only selects the hemisphere; the zone number gives the
/// central meridian. Fails with [`Error::NoConvergence`] if the latitude
/// iteration does not settle, and with a range error if the grid values lie
/// so far outside the zone that no geographic coordinate corresponds to them.
pub fn unproject(utm: &Utm) -> Result<LatLng> {
    let series = &*WGS84;
    let a = series.rectifying_radius;

    let false_northing = if utm.is_southern() {
        FALSE_NORTHING
    } else {
        0.0
    };
    let x = (utm.easting() - FALSE_EASTING) / UTM_SCALE_FACTOR;
    let y = (utm.northing() - false_northing) / UTM_SCALE_FACTOR;

    // transverse Mercator ratios
    let xi = y / a;
    let eta = x / a;

    let (xi_prime, eta_prime) = apply_series(&series.beta, xi, eta);

    let (sin_xi_prime, cos_xi_prime) = xi_prime.sin_cos();
    let sinh_eta_prime = eta_prime.sinh();
    let tau_prime = sin_xi_prime / (sinh_eta_prime * sinh_eta_prime + cos_xi_prime * cos_xi_prime).sqrt();

    let tau = solve_tau(tau_prime, series.eccentricity, MAX_ITERATIONS)?;

    let latitude = tau.atan().to_degrees();
    let longitude = (sinh_eta_prime.atan2(cos_xi_prime) + central_meridian(utm.zone())).to_degrees();

    LatLng::new(latitude, wrap_longitude(longitude))
}

/// Solve `τ'(τ) = tau_prime` for `τ = tan(latitude)` by Newton-Raphson
///
/// Starts from `τ = τ'` and stops once a step changes `τ` by at most 1e-12.
fn solve_tau(tau_prime: f64, e: f64, max_iterations: usize) -> Result<f64> {
    let e2 = e * e;
    let mut tau_i = tau_prime;

    for iteration in 1..=max_iterations {
        let root = (1.0 + tau_i * tau_i).sqrt();
        let sigma = (e * (e * tau_i / root).atanh()).sinh();
        let sigma_root = (1.0 + sigma * sigma).sqrt();
        let tau = tau_i * sigma_root - sigma * root;

        let f = tau - tau_prime;
        let f_prime =
            (sigma_root * root - sigma * tau_i) * ((1.0 - e2) * root / (1.0 + (1.0 - e2) * tau_i * tau_i));

        let delta = f / f_prime;
        tau_i -= delta;

        if delta.abs() <= TOLERANCE {
            trace!(iteration, "Latitude iteration converged");
            return Ok(tau_i);
        }
    }

    warn!(tau_prime, max_iterations, "Latitude iteration did not converge");
    Err(Error::NoConvergence {
        iterations: max_iterations,
    })
}

/// Bring a longitude computed relative to zone 1 or 60 back into -180..=180
fn wrap_longitude(longitude: f64) -> f64 {
    if longitude > 180.0 {
        longitude - 360.0
    } else if longitude < -180.0 {
        longitude + 360.0
    } else {
        longitude
    }
}

impl TryFrom<Utm> for LatLng {
    type Error = Error;

    fn try_from(utm: Utm) -> Result<Self> {
        unproject(&utm)
    }
}

impl TryFrom<&Utm> for LatLng {
    type Error = Error;

    fn try_from(utm: &Utm) -> Result<Self> {
        unproject(utm)
    }
}
