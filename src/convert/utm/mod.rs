//! Universal Transverse Mercator projection (Karney–Krüger)
//!
//! See C. F. F. Karney, "Transverse Mercator with an accuracy of a few
//! nanometers", J. Geodesy 85(8), 475–485 (2011).

mod forward;
mod inverse;
mod kruger;

pub use self::forward::project;
pub use self::inverse::{MAX_ITERATIONS, unproject};

use crate::constants::ZONE_WIDTH;
use crate::types::Utm;

/// Result of a forward projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmProjection {
    /// Grid coordinate
    pub utm: Utm,
    /// Meridian convergence in degrees (angle from grid north to true north)
    pub convergence: f64,
    /// Point scale factor
    pub scale: f64,
}

/// Central meridian of a zone in radians
fn central_meridian(zone: u8) -> f64 {
    // + 3 puts the meridian in the middle of the zone
    (f64::from(zone - 1) * ZONE_WIDTH - 180.0 + 3.0).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LatLng;

    #[test]
    fn central_meridians() {
        assert_eq!(central_meridian(1).to_degrees().round(), -177.0);
        assert_eq!(central_meridian(31), 3f64.to_radians());
        assert_eq!(central_meridian(33), 15f64.to_radians());
        assert_eq!(central_meridian(60).to_degrees().round(), 177.0);
    }

    #[test]
    fn roundtrip_grid() {
        let mut latitude = -79.5;
        while latitude < 84.0 {
            let mut longitude = -179.5;
            while longitude < 180.0 {
                let lat_lng = LatLng::new(latitude, longitude).unwrap();
                let utm = project(&lat_lng).unwrap().utm;
                let back = unproject(&utm).unwrap();

                assert!(
                    (back.latitude() - latitude).abs() < 1e-6,
                    "{lat_lng:?} -> {utm:?} -> {back:?}"
                );
                assert!(
                    (back.longitude() - longitude).abs() < 1e-6,
                    "{lat_lng:?} -> {utm:?} -> {back:?}"
                );

                longitude += 7.25;
            }
            latitude += 3.5;
        }
    }
}
