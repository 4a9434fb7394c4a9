use crate::constants::{GEOHASH_ALPHABET, GEOHASH_LENGTH};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Geohash string of up to 12 base-32 characters
///
/// Upper-case input is accepted and stored in lower case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeoHash {
    hash: String,
}

impl GeoHash {
    /// Validate and wrap a geohash string
    ///
    /// The empty hash is valid and decodes to the center of the world.
    pub fn new(hash: &str) -> Result<Self> {
        if hash.chars().count() > GEOHASH_LENGTH {
            return Err(Error::GeoHashTooLong(hash.chars().count()));
        }

        let hash = hash.to_ascii_lowercase();
        if let Some((position, character)) = hash
            .chars()
            .enumerate()
            .find(|(_, c)| alphabet_index(*c).is_none())
        {
            return Err(Error::InvalidGeoHashCharacter {
                character,
                position,
            });
        }

        Ok(Self { hash })
    }

    pub(crate) fn new_unchecked(hash: String) -> Self {
        Self { hash }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn len(&self) -> usize {
        self.hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// Alphabet indices of the characters, 5 bits each
    pub(crate) fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.hash.chars().filter_map(alphabet_index)
    }
}

/// Position of `c` in the geohash alphabet
fn alphabet_index(c: char) -> Option<u8> {
    let byte = u8::try_from(c).ok()?;
    GEOHASH_ALPHABET
        .iter()
        .position(|&b| b == byte)
        .and_then(|index| u8::try_from(index).ok())
}

impl FromStr for GeoHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for GeoHash {
    fn as_ref(&self) -> &str {
        &self.hash
    }
}

/// Renders the hash itself
///
/// A formatter precision truncates the output to that many characters
/// (default: the whole hash).
impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = f.precision().unwrap_or(GEOHASH_LENGTH).min(self.hash.len());
        f.write_str(&self.hash[..length])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_ok, assert_some_eq};
    use insta::{assert_compact_debug_snapshot, assert_snapshot};

    #[test]
    fn construct_valid() {
        let hash = assert_ok!(GeoHash::new("u33db2m3370m"));
        assert_eq!(hash.as_str(), "u33db2m3370m");
        assert_eq!(hash.len(), 12);

        let hash = assert_ok!(GeoHash::new("U33DB"));
        assert_eq!(hash.as_str(), "u33db");

        let hash = assert_ok!(GeoHash::new(""));
        assert!(hash.is_empty());
    }

    #[test]
    fn construct_invalid() {
        assert_compact_debug_snapshot!(GeoHash::new("u33a"), @"Err(InvalidGeoHashCharacter { character: 'a', position: 3 })");
        assert_compact_debug_snapshot!(GeoHash::new("ilo"), @"Err(InvalidGeoHashCharacter { character: 'i', position: 0 })");
        assert_compact_debug_snapshot!(GeoHash::new("u33db2m3370mz"), @"Err(GeoHashTooLong(13))");
        assert_compact_debug_snapshot!("u3 3".parse::<GeoHash>(), @"Err(InvalidGeoHashCharacter { character: ' ', position: 2 })");
    }

    #[test]
    fn alphabet_indices() {
        assert_some_eq!(alphabet_index('0'), 0);
        assert_some_eq!(alphabet_index('u'), 26);
        assert_some_eq!(alphabet_index('z'), 31);
        assert_eq!(alphabet_index('a'), None);
        assert_eq!(alphabet_index('ü'), None);

        let hash = GeoHash::new("u3").unwrap();
        assert_eq!(hash.indices().collect::<Vec<_>>(), vec![26, 3]);
    }

    #[test]
    fn display_truncates() {
        let hash = GeoHash::new("u33db2m3370m").unwrap();
        assert_snapshot!(hash, @"u33db2m3370m");
        assert_snapshot!(format!("{hash:.5}"), @"u33db");
        assert_snapshot!(format!("{hash:.0}"), @"");
        assert_snapshot!(format!("{hash:.20}"), @"u33db2m3370m");
    }
}
