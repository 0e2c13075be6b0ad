//! Sliding-window minimum / maximum trackers
//!
//! A tracker sees every sample together with its logical index (the window
//! cursor at insertion time) and answers min/max queries over the live
//! window `[begin, end)`.
//!
//! - [`MonotonicDeque`]: amortized O(1) per insertion, O(1) per query
//! - [`LinearScan`]: no state, O(window) per query
//!
//! Among samples that compare equal, both report the most recently inserted
//! one, so their results agree bit-for-bit (`0.0` vs `-0.0` included) on any
//! stream without NaNs.

use super::Sample;

#[cfg(feature = "std")]
use std::collections::VecDeque;

#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;

/// Min/max bookkeeping strategy for a sliding window
pub trait MinMaxTracker<T: Sample>: Clone + core::fmt::Debug {
    /// Short name used in diagnostics
    const NAME: &'static str;

    /// Create an empty tracker for a window of `capacity` slots
    fn with_capacity(capacity: usize) -> Self;

    /// Observe `sample` inserted at logical position `index`
    ///
    /// After the call the live window is
    /// `[index + 1 - min(index + 1, capacity), index]`.
    fn record(&mut self, index: u64, sample: T, capacity: usize);

    /// Extremes of the live window `[begin, end)`, which must be non-empty
    ///
    /// `slots` is the window's ring buffer (power-of-two length), logical
    /// index `i` lives at `slots[i & (len - 1)]`.
    fn minmax(&self, slots: &[T], begin: u64, end: u64) -> (T, T);

    /// Forget every recorded sample
    fn reset(&mut self);

    /// Bytes owned outside the tracker itself
    fn heap_bytes(&self) -> usize {
        0
    }
}

/// Monotonic double-ended queues of `(index, value)` candidates
///
/// The min queue is strictly increasing by value from front to back, the max
/// queue strictly decreasing. An incoming sample drops every trailing
/// candidate it matches or beats, and candidates whose index has left the
/// window are dropped from the front. The fronts are the current extremes.
#[derive(Clone, Debug)]
pub struct MonotonicDeque<T> {
    min: VecDeque<(u64, T)>,
    max: VecDeque<(u64, T)>,
}

impl<T: Sample> MinMaxTracker<T> for MonotonicDeque<T> {
    const NAME: &'static str = "monotonic-deque";

    fn with_capacity(capacity: usize) -> Self {
        Self {
            min: VecDeque::with_capacity(capacity),
            max: VecDeque::with_capacity(capacity),
        }
    }

    fn record(&mut self, index: u64, sample: T, capacity: usize) {
        let begin = (index + 1).saturating_sub(capacity as u64);

        while let Some(&(i, _)) = self.min.front() {
            if i < begin {
                self.min.pop_front();
            } else {
                break;
            }
        }
        while let Some(&(i, _)) = self.max.front() {
            if i < begin {
                self.max.pop_front();
            } else {
                break;
            }
        }

        while let Some(&(_, v)) = self.min.back() {
            if v >= sample {
                self.min.pop_back();
            } else {
                break;
            }
        }
        self.min.push_back((index, sample));

        while let Some(&(_, v)) = self.max.back() {
            if v <= sample {
                self.max.pop_back();
            } else {
                break;
            }
        }
        self.max.push_back((index, sample));
    }

    fn minmax(&self, _slots: &[T], _begin: u64, _end: u64) -> (T, T) {
        match (self.min.front(), self.max.front()) {
            (Some(&(_, lo)), Some(&(_, hi))) => (lo, hi),
            _ => (T::MAX, T::MIN),
        }
    }

    fn reset(&mut self) {
        self.min.clear();
        self.max.clear();
    }

    fn heap_bytes(&self) -> usize {
        (self.min.capacity() + self.max.capacity()) * core::mem::size_of::<(u64, T)>()
    }
}

/// Stateless tracker that rescans the live window on every query
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearScan;

impl<T: Sample> MinMaxTracker<T> for LinearScan {
    const NAME: &'static str = "linear-scan";

    fn with_capacity(_capacity: usize) -> Self {
        LinearScan
    }

    #[inline]
    fn record(&mut self, _index: u64, _sample: T, _capacity: usize) {}

    fn minmax(&self, slots: &[T], begin: u64, end: u64) -> (T, T) {
        let mask = slots.len() - 1;
        let first = slots[(begin as usize) & mask];
        let (mut lo, mut hi) = (first, first);
        for i in begin + 1..end {
            let x = slots[(i as usize) & mask];
            if x <= lo {
                lo = x;
            }
            if x >= hi {
                hi = x;
            }
        }
        (lo, hi)
    }

    fn reset(&mut self) {}
}
