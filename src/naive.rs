use crate::{error::WindowError, SlidingMin};

/// A ring buffer holding the last `k` values pushed.
/// Until `k` values have been seen it simply grows.
struct RingBuf<V> {
    k: usize,
    /// The next index to be overwritten once the buffer is full.
    idx: usize,
    data: Vec<V>,
}

impl<V> RingBuf<V> {
    fn new(k: usize) -> Self {
        assert!(k > 0);
        RingBuf {
            k,
            idx: 0,
            data: Vec::new(),
        }
    }

    fn push(&mut self, v: V) {
        if self.data.len() < self.k {
            self.data.push(v);
        } else {
            self.data[self.idx] = v;
        }
        self.idx += 1;
        if self.idx == self.k {
            self.idx = 0;
        }
    }
}

/// A RingBuf can be used as a slice.
impl<V> std::ops::Deref for RingBuf<V> {
    type Target = [V];

    fn deref(&self) -> &[V] {
        &self.data
    }
}

/// Rescans the last `k` values for every element: O(k) per element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl<V: Ord + Clone> SlidingMin<V> for Naive {
    fn sliding_min(
        &self,
        k: usize,
        it: impl Iterator<Item = V>,
    ) -> Result<impl Iterator<Item = V>, WindowError> {
        if k == 0 {
            return Err(WindowError::EmptyWindow);
        }
        let mut ring_buf = RingBuf::new(k);
        Ok(it.map(move |val| {
            ring_buf.push(val);
            ring_buf.iter().min().expect("k > 0").clone()
        }))
    }
}

/// Minimum of `values[max(i+1-k, 0)..=i]` for every `i`, by direct recomputation.
pub fn naive_sliding_min<V: Ord + Clone>(k: usize, values: &[V]) -> Result<Vec<V>, WindowError> {
    if k == 0 {
        return Err(WindowError::EmptyWindow);
    }
    Ok((0..values.len())
        .map(|i| {
            values[(i + 1).saturating_sub(k)..=i]
                .iter()
                .min()
                .expect("window is non-empty")
                .clone()
        })
        .collect())
}
