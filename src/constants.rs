//! Ellipsoid, projection and encoding constants
//!
//! All values describe the WGS84 ellipsoid and the standard UTM grid. They are
//! plain read-only data; no other datum is supported.

/// Semi-major (equatorial) axis of the WGS84 ellipsoid in meters
pub const EQUATORIAL_RADIUS: f64 = 6_378_137.0;

/// Flattening of the WGS84 ellipsoid
pub const FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Scale factor on the central meridian of every UTM zone
pub const UTM_SCALE_FACTOR: f64 = 0.9996;

/// Offset added to every easting so that values stay positive
pub const FALSE_EASTING: f64 = 500_000.0;

/// Offset added to northings in the southern hemisphere
pub const FALSE_NORTHING: f64 = 10_000_000.0;

/// Width of a UTM zone in degrees of longitude
pub const ZONE_WIDTH: f64 = 6.0;

/// Number of UTM zones
pub const ZONE_COUNT: u8 = 60;

/// Southern limit of the UTM latitude bands in degrees
pub const UTM_MIN_LATITUDE: f64 = -80.0;

/// Northern limit of the UTM latitude bands in degrees
pub const UTM_MAX_LATITUDE: f64 = 84.0;

/// Latitude band letters from 80°S northwards, 8° each
///
/// `X` appears twice because the northernmost band is 12° tall (72°N to 84°N).
pub const LATITUDE_BANDS: &[u8; 21] = b"CDEFGHJKLMNPQRSTUVWXX";

/// Index of band `N`, the first band of the northern hemisphere
pub const FIRST_NORTHERN_BAND: usize = 10;

/// Base-32 alphabet used by geohashes
pub const GEOHASH_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of characters produced by the geohash encoder
pub const GEOHASH_LENGTH: usize = 12;

/// Default decimal places for LatLng, DMS seconds and DDM minutes
pub const DEFAULT_DECIMALS: usize = 6;

/// Default decimal places for UTM easting and northing
pub const DEFAULT_UTM_DECIMALS: usize = 9;
