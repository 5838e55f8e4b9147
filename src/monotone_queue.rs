use std::collections::VecDeque;

use crate::Elem;

/// A queue of (pos, val) elements.
/// Positions are strictly increasing and values are non-decreasing, so that the
/// smallest value in the window is always at the front.
#[derive(Debug, Clone)]
pub(crate) struct MonotoneQueue<V> {
    q: VecDeque<Elem<V>>,
}

impl<V> MonotoneQueue<V> {
    /// Initialize a new queue.
    pub fn new() -> Self {
        Self { q: VecDeque::new() }
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Elem<V>> {
        self.q.iter()
    }
}

impl<V: Ord> MonotoneQueue<V> {
    /// Push `val` at position `pos`.
    /// Larger or equal preceding values are removed, so that the queue stays
    /// non-decreasing and `val` is the last occurrence of its value.
    pub fn push(&mut self, pos: usize, val: V) {
        debug_assert!(self.q.back().map_or(true, |back| back.pos < pos));
        while self.q.back().is_some_and(|back| back.val >= val) {
            self.q.pop_back();
        }
        self.q.push_back(Elem { val, pos });
    }

    /// Drop elements with position < `start`.
    /// Then return the first element with position >= `start`.
    pub fn pop(&mut self, start: usize) -> Option<&Elem<V>> {
        while self.q.front().is_some_and(|front| front.pos < start) {
            self.q.pop_front();
        }
        self.q.front()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn contents(q: &MonotoneQueue<i32>) -> Vec<(usize, i32)> {
        q.iter().map(|e| (e.pos, e.val)).collect()
    }

    #[test]
    fn push_drops_dominated_back() {
        let mut q = MonotoneQueue::new();
        q.push(0, 5);
        q.push(1, 3);
        q.push(2, 4);
        assert_eq!(contents(&q), [(1, 3), (2, 4)]);
        // Equal values are dominated too.
        q.push(3, 4);
        assert_eq!(contents(&q), [(1, 3), (3, 4)]);
        q.push(4, 1);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn pop_evicts_old_front() {
        let mut q = MonotoneQueue::new();
        q.push(0, 1);
        q.push(1, 2);
        q.push(2, 3);
        assert_eq!(q.pop(0).map(|e| e.val), Some(1));
        assert_eq!(q.pop(2).map(|e| e.val), Some(3));
        assert_eq!(q.len(), 1);
        assert!(q.pop(3).is_none());
        assert_eq!(q.len(), 0);
    }
}
