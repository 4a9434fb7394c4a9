use crate::error::{Error, Result};
use std::fmt;

/// Hemisphere of a latitude (north or south of the equator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatitudeHemisphere {
    North,
    South,
}

impl LatitudeHemisphere {
    /// Hemisphere of a signed latitude; zero counts as north
    pub fn of(latitude: f64) -> Self {
        if latitude >= 0.0 {
            LatitudeHemisphere::North
        } else {
            LatitudeHemisphere::South
        }
    }

    /// Parse from `N`/`S` (case-insensitive)
    pub fn from_letter(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Ok(LatitudeHemisphere::North),
            'S' => Ok(LatitudeHemisphere::South),
            _ => Err(Error::InvalidHemisphere(letter)),
        }
    }

    pub fn letter(self) -> char {
        match self {
            LatitudeHemisphere::North => 'N',
            LatitudeHemisphere::South => 'S',
        }
    }

    /// Sign applied to a latitude magnitude in this hemisphere
    pub fn signum(self) -> f64 {
        match self {
            LatitudeHemisphere::North => 1.0,
            LatitudeHemisphere::South => -1.0,
        }
    }
}

impl fmt::Display for LatitudeHemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Hemisphere of a longitude (east or west of the prime meridian)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LongitudeHemisphere {
    East,
    West,
}

impl LongitudeHemisphere {
    /// Hemisphere of a signed longitude; zero counts as east
    pub fn of(longitude: f64) -> Self {
        if longitude >= 0.0 {
            LongitudeHemisphere::East
        } else {
            LongitudeHemisphere::West
        }
    }

    /// Parse from `E`/`W` (case-insensitive)
    pub fn from_letter(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'E' => Ok(LongitudeHemisphere::East),
            'W' => Ok(LongitudeHemisphere::West),
            _ => Err(Error::InvalidHemisphere(letter)),
        }
    }

    pub fn letter(self) -> char {
        match self {
            LongitudeHemisphere::East => 'E',
            LongitudeHemisphere::West => 'W',
        }
    }

    /// Sign applied to a longitude magnitude in this hemisphere
    pub fn signum(self) -> f64 {
        match self {
            LongitudeHemisphere::East => 1.0,
            LongitudeHemisphere::West => -1.0,
        }
    }
}

impl fmt::Display for LongitudeHemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok_eq};

    #[test]
    fn hemisphere_of_sign() {
        assert_eq!(LatitudeHemisphere::of(52.5), LatitudeHemisphere::North);
        assert_eq!(LatitudeHemisphere::of(0.0), LatitudeHemisphere::North);
        assert_eq!(LatitudeHemisphere::of(-0.1), LatitudeHemisphere::South);
        assert_eq!(LongitudeHemisphere::of(13.4), LongitudeHemisphere::East);
        assert_eq!(LongitudeHemisphere::of(0.0), LongitudeHemisphere::East);
        assert_eq!(LongitudeHemisphere::of(-70.6), LongitudeHemisphere::West);
    }

    #[test]
    fn parse_letters() {
        assert_ok_eq!(LatitudeHemisphere::from_letter('N'), LatitudeHemisphere::North);
        assert_ok_eq!(LatitudeHemisphere::from_letter('s'), LatitudeHemisphere::South);
        assert_ok_eq!(LongitudeHemisphere::from_letter('e'), LongitudeHemisphere::East);
        assert_ok_eq!(LongitudeHemisphere::from_letter('W'), LongitudeHemisphere::West);
    }

    #[test]
    fn parse_rejects_other_axis() {
        assert_err!(LatitudeHemisphere::from_letter('E'));
        assert_err!(LongitudeHemisphere::from_letter('N'));
        assert_eq!(
            LatitudeHemisphere::from_letter('X').unwrap_err(),
            Error::InvalidHemisphere('X')
        );
    }
}
