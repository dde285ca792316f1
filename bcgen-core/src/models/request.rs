use crate::errors::BarcodeError;

///
/// How many barcodes to generate, and how long each one is.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRequest {
    pub count: usize,
    pub length: usize,
}

impl GenerationRequest {
    ///
    /// Validate the parameters before any sampling starts.
    ///
    /// Rejects a zero count or length, and any count above [capacity_bound]
    /// for the given length, since such a request can never be satisfied.
    ///
    pub fn new(count: usize, length: usize) -> Result<Self, BarcodeError> {
        if count == 0 {
            return Err(BarcodeError::InvalidCount);
        }
        if length == 0 {
            return Err(BarcodeError::InvalidLength);
        }

        let bound = capacity_bound(length);
        if count > bound {
            return Err(BarcodeError::Infeasible {
                count,
                length,
                bound,
            });
        }

        Ok(Self { count, length })
    }
}

///
/// Upper bound on the size of any pool of the given length.
///
/// Two members that agree on their first `length - 1` bases are at distance
/// at most one, so a pool holds at most one member per repeat-free prefix of
/// length `length - 1`, of which there are `4 * 3^(length - 2)`. A pool of
/// length one holds a single member. The bound is not always reached.
///
pub fn capacity_bound(length: usize) -> usize {
    match length {
        0 => 0,
        1 => 1,
        _ => {
            let mut bound: usize = 4;
            for _ in 2..length {
                bound = match bound.checked_mul(3) {
                    Some(b) => b,
                    None => return usize::MAX,
                };
            }
            bound
        }
    }
}
