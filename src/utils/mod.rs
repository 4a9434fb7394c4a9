//! Numeric helpers shared by the formatters

mod carry;
mod round;

pub(crate) use self::carry::carry_sixty;
pub use self::round::round_half_down;
pub(crate) use self::round::places;
