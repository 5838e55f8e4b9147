use std::iter::FusedIterator;

use tracing::{debug, warn};

use crate::{error::WindowError, monotone_queue::MonotoneQueue, SlidingMin};

/// Computes, for every element of a stream, the minimum of the last `k`
/// elements (fewer at the start of the stream).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindowMin {
    k: usize,
}

impl SlidingWindowMin {
    /// Fails with [`WindowError::EmptyWindow`] when `k == 0`.
    pub fn new(k: usize) -> Result<Self, WindowError> {
        if k == 0 {
            warn!("rejected sliding window of size 0");
            return Err(WindowError::EmptyWindow);
        }
        debug!(k, "sliding window minimum");
        Ok(Self { k })
    }

    /// The window size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Lazily compute the window minima of `stream`.
    ///
    /// The `i`th output is `min(stream[max(i+1-k, 0)..=i])`. Each call to
    /// `next` on the result pulls exactly one element from `stream`, so
    /// infinite streams are fine. At most `k` elements are buffered.
    pub fn process<I, V>(&self, stream: I) -> SlidingMinIter<I::IntoIter, V>
    where
        I: IntoIterator<Item = V>,
        V: Ord + Clone,
    {
        SlidingMinIter {
            it: stream.into_iter(),
            k: self.k,
            pos: 0,
            q: MonotoneQueue::new(),
        }
    }
}

/// The iterator returned by [`SlidingWindowMin::process`].
#[derive(Debug, Clone)]
pub struct SlidingMinIter<I, V> {
    it: I,
    k: usize,
    /// Position of the next element to be read.
    pos: usize,
    q: MonotoneQueue<V>,
}

impl<I, V> SlidingMinIter<I, V> {
    /// Number of candidate minima currently buffered. Never exceeds `k`.
    pub fn buffered(&self) -> usize {
        self.q.len()
    }
}

impl<I, V> Iterator for SlidingMinIter<I, V>
where
    I: Iterator<Item = V>,
    V: Ord + Clone,
{
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        let val = self.it.next()?;
        self.q.push(self.pos, val);
        self.pos += 1;
        // The window ending at the element just read starts at `pos - k`.
        let front = self
            .q
            .pop(self.pos.saturating_sub(self.k))
            .expect("the element just pushed is inside the window");
        Some(front.val.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<I, V> ExactSizeIterator for SlidingMinIter<I, V>
where
    I: ExactSizeIterator<Item = V>,
    V: Ord + Clone,
{
}

impl<I, V> FusedIterator for SlidingMinIter<I, V>
where
    I: FusedIterator<Item = V>,
    V: Ord + Clone,
{
}

/// Sliding window minimum using a monotone queue.
/// Amortized O(1) per element and O(k) memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Queue;

impl<V: Ord + Clone> SlidingMin<V> for Queue {
    fn sliding_min(
        &self,
        k: usize,
        it: impl Iterator<Item = V>,
    ) -> Result<impl Iterator<Item = V>, WindowError> {
        Ok(SlidingWindowMin::new(k)?.process(it))
    }
}
