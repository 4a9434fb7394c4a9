//! Degrees-minutes-seconds and degrees-decimal-minutes decomposition

use crate::types::{Ddm, Dms, LatLng};

/// Split an angle into whole degrees, whole minutes and seconds of its magnitude
fn split_dms(angle: f64) -> (u8, u8, f64) {
    let magnitude = angle.abs();
    let degrees = magnitude.floor();
    let minutes = ((magnitude - degrees) * 60.0).floor();
    let seconds = ((magnitude - degrees - minutes / 60.0) * 3600.0).max(0.0);

    (degrees as u8, minutes as u8, seconds)
}

/// Split an angle into whole degrees and decimal minutes of its magnitude
fn split_ddm(angle: f64) -> (u8, f64) {
    let magnitude = angle.abs();
    let degrees = magnitude.floor();
    let minutes = (magnitude - degrees) * 60.0;

    (degrees as u8, minutes)
}

/// Convert a coordinate to degrees, minutes and seconds
pub fn to_dms(lat_lng: &LatLng) -> Dms {
    let (degrees_lat, minutes_lat, seconds_lat) = split_dms(lat_lng.latitude());
    let (degrees_lng, minutes_lng, seconds_lng) = split_dms(lat_lng.longitude());

    Dms::new_unchecked(
        degrees_lat,
        minutes_lat,
        seconds_lat,
        lat_lng.latitude_hemisphere(),
        degrees_lng,
        minutes_lng,
        seconds_lng,
        lat_lng.longitude_hemisphere(),
    )
}

/// Convert a coordinate to degrees and decimal minutes
pub fn to_ddm(lat_lng: &LatLng) -> Ddm {
    let (degrees_lat, minutes_lat) = split_ddm(lat_lng.latitude());
    let (degrees_lng, minutes_lng) = split_ddm(lat_lng.longitude());

    Ddm::new_unchecked(
        degrees_lat,
        minutes_lat,
        lat_lng.latitude_hemisphere(),
        degrees_lng,
        minutes_lng,
        lat_lng.longitude_hemisphere(),
    )
}

/// Recombine degrees, minutes and seconds into signed decimal degrees
pub fn from_dms(dms: &Dms) -> LatLng {
    let latitude = dms.hemisphere_lat().signum()
        * (f64::from(dms.degrees_lat())
            + f64::from(dms.minutes_lat()) / 60.0
            + dms.seconds_lat() / 3600.0);
    let longitude = dms.hemisphere_lng().signum()
        * (f64::from(dms.degrees_lng())
            + f64::from(dms.minutes_lng()) / 60.0
            + dms.seconds_lng() / 3600.0);

    LatLng::new_unchecked(latitude, longitude)
}

/// Recombine degrees and decimal minutes into signed decimal degrees
pub fn from_ddm(ddm: &Ddm) -> LatLng {
    let latitude =
        ddm.hemisphere_lat().signum() * (f64::from(ddm.degrees_lat()) + ddm.minutes_lat() / 60.0);
    let longitude =
        ddm.hemisphere_lng().signum() * (f64::from(ddm.degrees_lng()) + ddm.minutes_lng() / 60.0);

    LatLng::new_unchecked(latitude, longitude)
}

impl From<LatLng> for Dms {
    fn from(lat_lng: LatLng) -> Self {
        to_dms(&lat_lng)
    }
}

impl From<LatLng> for Ddm {
    fn from(lat_lng: LatLng) -> Self {
        to_ddm(&lat_lng)
    }
}

impl From<Dms> for LatLng {
    fn from(dms: Dms) -> Self {
        from_dms(&dms)
    }
}

impl From<Ddm> for LatLng {
    fn from(ddm: Ddm) -> Self {
        from_ddm(&ddm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LatitudeHemisphere, LongitudeHemisphere};
    use insta::assert_snapshot;

    fn berlin() -> LatLng {
        LatLng::new(52.516_253_403_348_74, 13.377_625_381_177_886).unwrap()
    }

    #[test]
    fn dms_components() {
        let dms = to_dms(&berlin());
        assert_eq!(dms.degrees_lat(), 52);
        assert_eq!(dms.minutes_lat(), 30);
        assert!((dms.seconds_lat() - 58.512_252_055_5).abs() < 1e-9);
        assert_eq!(dms.hemisphere_lat(), LatitudeHemisphere::North);
        assert_eq!(dms.degrees_lng(), 13);
        assert_eq!(dms.minutes_lng(), 22);
        assert!((dms.seconds_lng() - 39.451_372_240_4).abs() < 1e-9);
        assert_eq!(dms.hemisphere_lng(), LongitudeHemisphere::East);
    }

    #[test]
    fn ddm_components() {
        let ddm = to_ddm(&berlin());
        assert_eq!(ddm.degrees_lat(), 52);
        assert!((ddm.minutes_lat() - 30.975_204_200_9).abs() < 1e-9);
        assert_eq!(ddm.degrees_lng(), 13);
        assert!((ddm.minutes_lng() - 22.657_522_870_7).abs() < 1e-9);
    }

    #[test]
    fn negative_coordinates_use_magnitudes() {
        let lat_lng = LatLng::new(-17.978_733, -70.5).unwrap();

        let dms = to_dms(&lat_lng);
        assert_eq!(dms.degrees_lat(), 17);
        assert_eq!(dms.minutes_lat(), 58);
        assert_eq!(dms.hemisphere_lat(), LatitudeHemisphere::South);
        assert_eq!(dms.degrees_lng(), 70);
        assert_eq!(dms.minutes_lng(), 30);
        assert_eq!(dms.hemisphere_lng(), LongitudeHemisphere::West);
        assert_snapshot!(dms, @r#"17°58'43.438800" S, 70°30'0.000000" W"#);

        let ddm = to_ddm(&lat_lng);
        assert_snapshot!(ddm, @"17°58.723980' S, 70°30.000000' W");
    }

    #[test]
    fn small_magnitudes() {
        let lat_lng = LatLng::new(-0.0001, 0.1).unwrap();
        assert_snapshot!(to_dms(&lat_lng), @r#"0°0'0.360000" S, 0°6'0.000000" E"#);
        assert_snapshot!(to_ddm(&lat_lng), @"0°0.006000' S, 0°6.000000' E");
    }

    #[test]
    fn dms_back_to_decimal() {
        let lat_lng = from_dms(&to_dms(&berlin()));
        assert!((lat_lng.latitude() - 52.516_253_403_348_74).abs() < 1e-12);
        assert!((lat_lng.longitude() - 13.377_625_381_177_886).abs() < 1e-12);

        let dms = Dms::new(
            17,
            58,
            43.4388,
            LatitudeHemisphere::South,
            70,
            30,
            0.0,
            LongitudeHemisphere::West,
        )
        .unwrap();
        let lat_lng = LatLng::from(dms);
        assert!((lat_lng.latitude() + 17.978_733).abs() < 1e-9);
        assert_eq!(lat_lng.longitude(), -70.5);
    }

    #[test]
    fn ddm_back_to_decimal() {
        let lat_lng = LatLng::from(Ddm::from(berlin()));
        assert!((lat_lng.latitude() - 52.516_253_403_348_74).abs() < 1e-12);
        assert!((lat_lng.longitude() - 13.377_625_381_177_886).abs() < 1e-12);
    }
}
