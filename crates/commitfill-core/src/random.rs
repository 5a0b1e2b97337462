//! Injectable randomness.
//!
//! Every random decision in the scheduler goes through [`RandomSource`], so
//! tests can pin a seed and assert exact plans.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

/// Source of uniform random choices.
pub trait RandomSource {
    /// Uniform integer in `[low, high]`. Returns `low` when `high <= low`.
    fn range_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        self.range_inclusive(0, len.saturating_sub(1))
    }

    /// Uniformly pick one element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &items[self.index(items.len())]
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        (**self).range_inclusive(low, high)
    }
}

/// PCG-backed random source, seeded for reproducible runs or from entropy.
#[derive(Debug, Clone)]
pub struct PcgSource {
    rng: Mcg128Xsl64,
}

impl PcgSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for PcgSource {
    fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}
