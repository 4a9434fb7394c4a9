//! `serde` support, enabled by the `serde` feature
//!
//! Every value serializes as its default `Display` string, e.g. a [`Utm`]
//! becomes `"33U 389912.653201401 5819696.850323285"`.

use crate::types::{Coordinate, CoordinateFormat, Ddm, Dms, GeoHash, LatLng, Utm};

macro_rules! serialize_as_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.collect_str(self)
                }
            }
        )+
    };
}

serialize_as_display!(LatLng, Dms, Ddm, Utm, GeoHash, Coordinate, CoordinateFormat);

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn serialize_values() {
        let lat_lng = LatLng::new(52.516_253_403_348_74, 13.377_625_381_177_886).unwrap();
        assert_snapshot!(serde_json::to_string(&lat_lng).unwrap(), @r#""52.516253° N 13.377625° E""#);

        let coordinate = Coordinate::from(lat_lng)
            .convert(CoordinateFormat::Utm)
            .unwrap();
        assert_snapshot!(serde_json::to_string(&coordinate).unwrap(), @r#""33U 389912.653201401 5819696.850323285""#);

        let dms = Dms::from(lat_lng);
        assert_snapshot!(serde_json::to_string(&dms).unwrap(), @r#""52°30'58.512252\" N, 13°22'39.451372\" E""#);
    }

    #[test]
    fn serialize_in_struct() {
        let value = serde_json::json!({
            "format": CoordinateFormat::GeoHash,
            "hash": GeoHash::new("u33db2m3370m").unwrap(),
        });
        assert_snapshot!(value.to_string(), @r#"{"format":"GeoHash","hash":"u33db2m3370m"}"#);
    }
}
