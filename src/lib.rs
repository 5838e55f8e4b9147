//! Sliding window minimum over a stream.
//!
//! For a window size `k`, the `i`th output is the minimum of the inputs at
//! positions `max(i+1-k, 0)..=i`, so there is exactly one output per input.
//! The main implementation keeps a monotone queue of candidate minima and
//! takes amortized O(1) time per element and O(k) memory, also on infinite
//! input.
//!
//! ```
//! use sliding_window_min::SlidingWindowMin;
//!
//! let tracker = SlidingWindowMin::new(3)?;
//! let minima: Vec<_> = tracker.process([5, 3, 4, 2, 1, 6]).collect();
//! assert_eq!(minima, [5, 3, 3, 2, 1, 1]);
//! # Ok::<(), sliding_window_min::WindowError>(())
//! ```
//!
//! Values must be totally ordered (`Ord`). To use floats, wrap them in a type
//! whose `Ord` is implemented via `f64::total_cmp`.

pub mod error;
mod monotone_queue;
pub mod naive;
pub mod tracker;

pub use error::WindowError;
pub use naive::{naive_sliding_min, Naive};
pub use tracker::{Queue, SlidingMinIter, SlidingWindowMin};

use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaChaRng,
};
use std::cmp::Reverse;

/// A value at an absolute position in the stream.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub(crate) struct Elem<V> {
    pub val: V,
    pub pos: usize,
}

pub trait SlidingMin<V> {
    /// Take an iterator over values of type V.
    /// Return an iterator over the minima of the windows of size `k` ending at
    /// each value, including the shorter windows at the start.
    fn sliding_min(
        &self,
        k: usize,
        it: impl Iterator<Item = V>,
    ) -> Result<impl Iterator<Item = V>, WindowError>;
}

/// An iterator extension trait so we can conveniently call .sliding_min on any iterator.
pub trait SlidingMinExt<V: Ord + Clone>: Iterator<Item = V> + Sized {
    fn sliding_min(self, k: usize) -> Result<SlidingMinIter<Self, V>, WindowError>;

    /// Sliding window maximum, computed as the minimum in reversed order.
    fn sliding_max(self, k: usize) -> Result<impl Iterator<Item = V>, WindowError>;
}

impl<V, I> SlidingMinExt<V> for I
where
    I: Iterator<Item = V>,
    V: Ord + Clone,
{
    fn sliding_min(self, k: usize) -> Result<SlidingMinIter<Self, V>, WindowError> {
        Ok(SlidingWindowMin::new(k)?.process(self))
    }

    fn sliding_max(self, k: usize) -> Result<impl Iterator<Item = V>, WindowError> {
        Ok(SlidingWindowMin::new(k)?
            .process(self.map(Reverse))
            .map(|Reverse(val)| val))
    }
}

/// Generate `n` random values in `0..sigma`, deterministically from `seed`.
pub fn generate_random_values(n: usize, sigma: u64, seed: u64) -> Vec<u64> {
    assert!(sigma > 0);
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u64() % sigma).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn extension_trait() {
        let out = [5, 3, 4, 2, 1, 6].into_iter().sliding_min(3).unwrap().collect_vec();
        assert_eq!(out, [5, 3, 3, 2, 1, 1]);
        assert!(std::iter::empty::<u8>().sliding_min(0).is_err());
        assert!(std::iter::empty::<u8>().sliding_max(0).is_err());
    }

    #[test]
    fn sliding_max() {
        let out = [5, 3, 4, 2, 1, 6].into_iter().sliding_max(3).unwrap().collect_vec();
        assert_eq!(out, [5, 5, 5, 4, 4, 6]);

        let values = generate_random_values(2000, 50, 1);
        for k in [1, 2, 5, 64] {
            let expected = (0..values.len())
                .map(|i| *values[(i + 1).saturating_sub(k)..=i].iter().max().unwrap())
                .collect_vec();
            let out = values.iter().copied().sliding_max(k).unwrap().collect_vec();
            assert_eq!(expected, out, "k={k}");
        }
    }

    fn run<S: SlidingMin<u64>>(s: &S, k: usize, values: &[u64]) -> Vec<u64> {
        s.sliding_min(k, values.iter().copied()).unwrap().collect_vec()
    }

    #[test]
    fn strategies_agree() {
        for seed in 0..4 {
            let values = generate_random_values(2000, 4 << seed, seed);
            for k in [1, 2, 3, 10, 100, 1999, 2000, 10000] {
                assert_eq!(run(&Queue, k, &values), run(&Naive, k, &values), "k={k} seed={seed}");
            }
        }
    }

    #[test]
    fn random_values_are_deterministic() {
        let a = generate_random_values(100, 4, 213456);
        assert_eq!(a, generate_random_values(100, 4, 213456));
        assert!(a.iter().all(|&x| x < 4));
        assert_ne!(a, generate_random_values(100, 4, 213457));
    }
}
