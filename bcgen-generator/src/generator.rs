use bcgen_core::PoolView;
use bcgen_core::constraints::has_adjacent_repeat;
use bcgen_core::errors::{BarcodeError, Result};
use bcgen_core::models::Sequence;

use crate::sampler::SequenceSampler;
use crate::shared::SharedPool;

///
/// Rejection sampler producing one sequence that satisfies both constraints.
///
/// With `max_attempts` set, a call gives up with
/// [BarcodeError::AttemptsExhausted] after that many rejected candidates;
/// with `None` it retries until a candidate is accepted. A zero length is
/// rejected with [BarcodeError::InvalidLength] before any sampling.
///
#[derive(Debug, Clone, Copy)]
pub struct UniqueSequenceGenerator {
    length: usize,
    max_attempts: Option<u64>,
}

impl UniqueSequenceGenerator {
    pub fn new(length: usize, max_attempts: Option<u64>) -> Self {
        Self {
            length,
            max_attempts,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    fn check_length(&self) -> Result<()> {
        match self.length {
            0 => Err(BarcodeError::InvalidLength),
            _ => Ok(()),
        }
    }

    fn check_attempts(&self, rejected: u64) -> Result<()> {
        match self.max_attempts {
            Some(limit) if rejected >= limit => Err(BarcodeError::AttemptsExhausted {
                attempts: rejected,
                length: self.length,
            }),
            _ => Ok(()),
        }
    }

    ///
    /// Sample until a candidate passes both constraints against `view`.
    ///
    /// The view is only read; the accepted sequence is returned, not added.
    ///
    /// # Arguments
    /// - sampler: the caller's random source
    /// - view: sequences the candidate must keep its distance from
    ///
    pub fn generate<V: PoolView + ?Sized>(
        &self,
        sampler: &mut SequenceSampler,
        view: &V,
    ) -> Result<Sequence> {
        self.check_length()?;
        let mut rejected: u64 = 0;
        loop {
            let candidate = sampler.sample(self.length);
            if !has_adjacent_repeat(candidate.as_bytes()) && view.is_far_enough(&candidate) {
                return Ok(candidate);
            }
            rejected += 1;
            self.check_attempts(rejected)?;
        }
    }

    ///
    /// Sample until a candidate is accepted into the live shared pool.
    ///
    /// A candidate that passes the read-locked check can still lose to one
    /// appended by another worker in the meantime; it then counts as rejected
    /// and sampling continues.
    ///
    pub fn generate_into(
        &self,
        sampler: &mut SequenceSampler,
        shared: &SharedPool,
    ) -> Result<Sequence> {
        self.check_length()?;
        let mut rejected: u64 = 0;
        loop {
            let candidate = sampler.sample(self.length);
            if !has_adjacent_repeat(candidate.as_bytes())
                && shared.is_far_enough(&candidate)?
                && shared.try_insert(candidate.clone())?
            {
                return Ok(candidate);
            }
            rejected += 1;
            self.check_attempts(rejected)?;
        }
    }
}
