use std::sync::RwLock;

use bcgen_core::PoolView;
use bcgen_core::errors::{BarcodeError, Result};
use bcgen_core::models::{Pool, Sequence};

///
/// A [Pool] shared between workers of the strict phase.
///
/// Workers check candidates under the read lock, then take the write lock to
/// check again and append. The second check sees every sequence appended by
/// other workers since the first one, so two workers can never both admit
/// sequences that are too close to each other.
///
#[derive(Debug)]
pub struct SharedPool {
    inner: RwLock<Pool>,
}

impl SharedPool {
    pub fn new(pool: Pool) -> Self {
        Self {
            inner: RwLock::new(pool),
        }
    }

    pub fn length(&self) -> Result<usize> {
        Ok(self.inner.read().map_err(|_| BarcodeError::PoolPoisoned)?.length())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.inner.read().map_err(|_| BarcodeError::PoolPoisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Distance check against the pool as it is right now.
    pub fn is_far_enough(&self, candidate: &Sequence) -> Result<bool> {
        let pool = self.inner.read().map_err(|_| BarcodeError::PoolPoisoned)?;
        Ok(pool.is_far_enough(candidate))
    }

    /// Re-check and append under the write lock.
    ///
    /// # Returns
    /// Whether the candidate was appended.
    pub fn try_insert(&self, candidate: Sequence) -> Result<bool> {
        let mut pool = self.inner.write().map_err(|_| BarcodeError::PoolPoisoned)?;
        Ok(pool.try_insert(candidate))
    }

    pub fn into_inner(self) -> Result<Pool> {
        self.inner.into_inner().map_err(|_| BarcodeError::PoolPoisoned)
    }
}
