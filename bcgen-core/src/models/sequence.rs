use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::ALPHABET;
use crate::errors::BarcodeError;

///
/// Sequence struct, one barcode made of A, C, G and T.
///
/// The bytes are validated on construction so every `Sequence` in the
/// program is known to be non-empty and over the DNA alphabet.
///
#[derive(Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Clone)]
pub struct Sequence {
    bases: Box<[u8]>,
}

impl Sequence {
    ///
    /// Build a sequence from raw bases, checking the alphabet.
    ///
    pub fn from_bytes(bases: &[u8]) -> Result<Self, BarcodeError> {
        if bases.is_empty() {
            return Err(BarcodeError::EmptySequence);
        }

        if let Some(position) = bases.iter().position(|b| !ALPHABET.contains(b)) {
            return Err(BarcodeError::InvalidBase {
                base: bases[position] as char,
                position,
            });
        }

        Ok(Self {
            bases: bases.into(),
        })
    }

    ///
    /// Build a sequence from indices into [ALPHABET] (0 = A, 1 = C, 2 = G, 3 = T).
    /// Only the low two bits of each index are used. The iterator must yield at
    /// least one index.
    ///
    pub fn from_symbol_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let bases: Vec<u8> = indices.into_iter().map(|i| ALPHABET[i & 3]).collect();
        debug_assert!(!bases.is_empty(), "Sequence must not be empty");
        Self {
            bases: bases.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    pub fn as_str(&self) -> &str {
        // only ASCII bases are ever stored
        std::str::from_utf8(&self.bases).unwrap_or_default()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.bases
    }
}

impl TryFrom<&str> for Sequence {
    type Error = BarcodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Sequence::from_bytes(value.trim().as_bytes())
    }
}

impl TryFrom<String> for Sequence {
    type Error = BarcodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Sequence::try_from(value.as_str())
    }
}

impl FromStr for Sequence {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sequence::try_from(s)
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Sequence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Sequence::try_from(raw).map_err(serde::de::Error::custom)
    }
}
