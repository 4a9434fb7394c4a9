//! Conversion algorithms between coordinate representations
//!
//! Every conversion goes through [`LatLng`](crate::LatLng). The value types
//! expose these functions through `From`/`TryFrom` implementations; they are
//! public so that callers can use the algorithms directly.

pub mod geohash;
pub mod sexagesimal;
pub mod utm;
