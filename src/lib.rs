#![doc = include_str!("../README.md")]

pub use crate::convert::utm::UtmProjection;
pub use crate::error::{Axis, Error, Result};
pub use crate::types::*;

pub mod constants;
pub mod convert;
mod error;
#[cfg(feature = "serde")]
mod serialize;
mod types;
pub mod utils;
