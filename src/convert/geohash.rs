//! Geohash encoding and decoding by interleaved bisection

use crate::constants::{GEOHASH_ALPHABET, GEOHASH_LENGTH};
use crate::types::{GeoHash, LatLng};
use crate::utils::round_half_down;
use std::f64::consts::LN_10;

/// Bits encoded by one geohash character
const BITS_PER_CHAR: u32 = 5;

/// Closed interval narrowed by repeated bisection
#[derive(Debug, Clone, Copy, PartialEq)]
struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    const LATITUDE: Interval = Interval {
        min: -90.0,
        max: 90.0,
    };
    const LONGITUDE: Interval = Interval {
        min: -180.0,
        max: 180.0,
    };

    fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Keep the upper half if `upper` is set, the lower half otherwise
    fn bisect(&mut self, upper: bool) {
        let mid = self.mid();
        if upper {
            self.min = mid;
        } else {
            self.max = mid;
        }
    }

    /// Decimal places that are meaningful for a value inside this interval
    fn decimal_places(&self) -> i32 {
        ((2.0 - (self.max - self.min).ln()) / LN_10).floor() as i32
    }
}

/// Encode a coordinate as a 12 character geohash
///
/// Bits alternate between longitude and latitude, starting with longitude.
/// A bit is set when the coordinate lies strictly above the midpoint of the
/// current interval.
pub fn encode(lat_lng: &LatLng) -> GeoHash {
    let mut latitude = Interval::LATITUDE;
    let mut longitude = Interval::LONGITUDE;
    let mut even = true;
    let mut hash = String::with_capacity(GEOHASH_LENGTH);

    while hash.len() < GEOHASH_LENGTH {
        let mut index = 0;
        for _ in 0..BITS_PER_CHAR {
            let (interval, value) = if even {
                (&mut longitude, lat_lng.longitude())
            } else {
                (&mut latitude, lat_lng.latitude())
            };

            let upper = value > interval.mid();
            interval.bisect(upper);
            index = (index << 1) | usize::from(upper);
            even = !even;
        }

        hash.push(char::from(GEOHASH_ALPHABET[index]));
    }

    GeoHash::new_unchecked(hash)
}

/// Narrow both intervals by the bits of `hash`
fn bounds(hash: &GeoHash) -> (Interval, Interval) {
    let mut latitude = Interval::LATITUDE;
    let mut longitude = Interval::LONGITUDE;
    let mut even = true;

    for index in hash.indices() {
        for bit in (0..BITS_PER_CHAR).rev() {
            let upper = index & (1 << bit) != 0;
            if even {
                longitude.bisect(upper);
            } else {
                latitude.bisect(upper);
            }
            even = !even;
        }
    }

    (latitude, longitude)
}

/// Decimal places reported for the latitude and longitude of a decoded hash
///
/// Derived from the width of the final intervals, so shorter hashes report
/// fewer digits. The value is negative for very short hashes (`"u"` rounds
/// to tens of degrees).
pub fn decimal_places(hash: &GeoHash) -> (i32, i32) {
    let (latitude, longitude) = bounds(hash);
    (latitude.decimal_places(), longitude.decimal_places())
}

/// Decode a geohash to the center of its cell
///
/// The center is rounded half-down to [`decimal_places`] so that the result
/// does not claim more resolution than the hash carries. The empty hash
/// decodes to `(0, 0)`.
pub fn decode(hash: &GeoHash) -> LatLng {
    let (latitude, longitude) = bounds(hash);

    LatLng::new_unchecked(
        round_half_down(latitude.mid(), latitude.decimal_places()),
        round_half_down(longitude.mid(), longitude.decimal_places()),
    )
}

impl From<LatLng> for GeoHash {
    fn from(lat_lng: LatLng) -> Self {
        encode(&lat_lng)
    }
}

impl From<GeoHash> for LatLng {
    fn from(hash: GeoHash) -> Self {
        decode(&hash)
    }
}

impl From<&GeoHash> for LatLng {
    fn from(hash: &GeoHash) -> Self {
        decode(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::{assert_compact_debug_snapshot, assert_snapshot};

    fn hash(s: &str) -> GeoHash {
        GeoHash::new(s).unwrap()
    }

    #[test]
    fn encode_berlin() {
        let lat_lng = LatLng::new(52.516_253_403_348_74, 13.377_625_381_177_886).unwrap();
        assert_snapshot!(encode(&lat_lng), @"u33db2m3370m");
    }

    #[test]
    fn encode_corners() {
        assert_snapshot!(encode(&LatLng::new(0.0, 0.0).unwrap()), @"7zzzzzzzzzzz");
        assert_snapshot!(encode(&LatLng::new(-90.0, -180.0).unwrap()), @"000000000000");
        assert_snapshot!(encode(&LatLng::new(90.0, 180.0).unwrap()), @"zzzzzzzzzzzz");
    }

    #[test]
    fn decode_full_hash() {
        let lat_lng = decode(&hash("u33db2m3370m"));
        assert_eq!(lat_lng.latitude(), 52.516_253_3);
        assert_eq!(lat_lng.longitude(), 13.377_625_3);
    }

    #[test]
    fn decode_single_character() {
        let lat_lng = decode(&hash("u"));
        assert_eq!(lat_lng.latitude(), 70.0);
        assert_eq!(lat_lng.longitude(), 20.0);
        assert_compact_debug_snapshot!(decimal_places(&hash("u")), @"(-1, -1)");
    }

    #[test]
    fn decode_empty_hash() {
        let lat_lng = decode(&hash(""));
        assert_eq!(lat_lng.latitude(), 0.0);
        assert_eq!(lat_lng.longitude(), 0.0);
        assert_compact_debug_snapshot!(decimal_places(&hash("")), @"(-2, -2)");
    }

    #[test]
    fn decimal_places_grow_with_length() {
        let full = "u33db2m3370m";
        let places: Vec<_> = (0..=full.len())
            .map(|length| decimal_places(&hash(&full[..length])))
            .collect();

        for pair in places.windows(2) {
            assert!(pair[0].0 <= pair[1].0, "{places:?}");
            assert!(pair[0].1 <= pair[1].1, "{places:?}");
        }
        assert_compact_debug_snapshot!(places[12], @"(7, 7)");
    }

    #[test]
    fn decode_reproduces_encoded_point() {
        let points = [
            (52.516_253_403_348_74, 13.377_625_381_177_886),
            (-33.868_8, 151.209_3),
            (40.689_247, -74.044_502),
            (-54.801_912, -68.302_951),
            (0.0, 0.0),
        ];

        for (latitude, longitude) in points {
            let lat_lng = LatLng::new(latitude, longitude).unwrap();
            let decoded = decode(&encode(&lat_lng));
            assert!((decoded.latitude() - latitude).abs() < 1e-6, "{decoded:?}");
            assert!((decoded.longitude() - longitude).abs() < 1e-6, "{decoded:?}");
        }
    }
}
