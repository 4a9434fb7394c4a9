mod coordinate;
mod ddm;
mod dms;
mod format;
mod geohash;
mod hemisphere;
mod lat_lng;
mod utm;

pub use coordinate::*;
pub use ddm::*;
pub use dms::*;
pub use format::*;
pub use geohash::*;
pub use hemisphere::*;
pub use lat_lng::*;
pub use utm::*;
