//! Fixed-capacity sliding-window moving average
//!
//! Samples are written into a power-of-two ring buffer at `cursor & mask`.
//! The running sum subtracts each evicted sample, so it always covers exactly
//! the live window. Extremes are delegated to a [`MinMaxTracker`].

use super::minmax::{MinMaxTracker, MonotonicDeque};
use super::storage::{Heap, Inline, Storage};
use super::Sample;
use crate::traits::{Accumulator, ConfigError};

/// Moving average over the last `capacity` samples
///
/// Storage and min/max strategy are chosen by type:
///
/// - `S`: [`Heap`] (run-time capacity, the default) or [`Inline`] (capacity
///   fixed by the type)
/// - `M`: [`MonotonicDeque`] (amortized O(1), the default) or
///   [`LinearScan`](super::LinearScan) (rescans the window per query)
///
/// Integer sums wrap while a sample replaces the oldest one, so `sum()` is
/// exact whenever the live window's sum fits in `T`.
///
/// # Example
///
/// ```
/// use runstat::window::MovingAverage;
///
/// let mut avg = MovingAverage::<f64>::new(4).unwrap();
/// for x in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
///     avg.add(x);
/// }
///
/// assert_eq!(avg.size(), 4);
/// assert_eq!(avg.sum(), 18.0);
/// assert_eq!(avg.mean(), 4.5);
/// assert_eq!(avg.minmax(), (3.0, 6.0));
/// ```
///
/// Inline storage with the capacity in the type:
///
/// ```
/// use runstat::window::FixedMovingAverage;
///
/// let mut avg = FixedMovingAverage::<u32, 8>::fixed();
/// avg.add(10);
/// avg.add(20);
/// assert_eq!(avg.capacity(), 8);
/// assert_eq!(avg.mean(), 15.0);
/// ```
#[derive(Clone, Debug)]
pub struct MovingAverage<T: Sample, S: Storage<T> = Heap<T>, M: MinMaxTracker<T> = MonotonicDeque<T>> {
    storage: S,
    tracker: M,
    /// `capacity - 1`
    mask: usize,
    /// Logical index of the next insertion, reset only by `clear`
    cursor: u64,
    sum: T,
    last: T,
}

/// Moving average whose buffer lives inline, with capacity `N`
pub type FixedMovingAverage<T, const N: usize, M = MonotonicDeque<T>> =
    MovingAverage<T, Inline<T, N>, M>;

impl<T: Sample, S: Storage<T>, M: MinMaxTracker<T>> MovingAverage<T, S, M> {
    /// Create a window with a run-time capacity
    ///
    /// For [`Heap`] storage `dynamic_capacity` must be a nonzero power of
    /// two. For [`Inline`] storage the capacity comes from the type and
    /// `dynamic_capacity` must be `0`.
    pub fn new(dynamic_capacity: usize) -> Result<Self, ConfigError> {
        let storage = S::allocate(dynamic_capacity).map_err(|e| {
            tracing::warn!(
                static_capacity = S::STATIC_CAPACITY,
                dynamic_capacity,
                error = %e,
                "rejected moving average configuration"
            );
            e
        })?;
        Ok(Self::from_storage(storage))
    }

    fn from_storage(storage: S) -> Self {
        let capacity = storage.slots().len();
        tracing::debug!(capacity, tracker = M::NAME, "moving average window allocated");
        Self {
            tracker: M::with_capacity(capacity),
            storage,
            mask: capacity - 1,
            cursor: 0,
            sum: T::ZERO,
            last: T::ZERO,
        }
    }

    /// Add a sample, evicting the oldest one once the window is full
    pub fn add(&mut self, sample: T) {
        let slot = (self.cursor as usize) & self.mask;
        let slots = self.storage.slots_mut();
        let evicted = slots[slot];

        self.sum = self.sum.accumulate(sample);
        if self.cursor > self.mask as u64 {
            self.sum = self.sum.evict(evicted);
        }

        self.tracker.record(self.cursor, sample, self.mask + 1);

        slots[slot] = sample;
        self.cursor += 1;
        self.last = sample;
    }

    /// Reset to the freshly constructed state
    pub fn clear(&mut self) {
        self.storage.slots_mut().fill(T::ZERO);
        self.tracker.reset();
        self.sum = T::ZERO;
        self.last = T::ZERO;
        self.cursor = 0;
    }

    #[inline]
    pub fn empty(&self) -> bool {
        self.cursor == 0
    }

    /// Whether `capacity()` samples have been seen since the last clear
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursor > self.mask as u64
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.mask + 1
    }

    /// Number of live samples, `min(samples added, capacity)`
    #[inline]
    pub fn size(&self) -> usize {
        if self.is_full() {
            self.capacity()
        } else {
            self.cursor as usize
        }
    }

    /// Sum of the live window
    #[inline]
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Last sample added, zero if none
    #[inline]
    pub fn last(&self) -> T {
        self.last
    }

    /// Mean of the live window, `0.0` when empty
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.cursor == 0 {
            0.0
        } else {
            self.sum.to_f64() / self.size() as f64
        }
    }

    /// `(min, max)` of the live window
    ///
    /// An empty window reports `(T::MAX, T::MIN)`. For floats `T::MIN` is the
    /// lowest finite value (`f64::MIN`), not the smallest positive one.
    pub fn minmax(&self) -> (T, T) {
        if self.empty() {
            return (T::MAX, T::MIN);
        }
        let end = self.cursor;
        let begin = end - self.size() as u64;
        self.tracker.minmax(self.storage.slots(), begin, end)
    }

    /// Smallest live sample, `T::MAX` when empty
    pub fn min(&self) -> T {
        self.minmax().0
    }

    /// Largest live sample, `T::MIN` when empty
    pub fn max(&self) -> T {
        self.minmax().1
    }

    /// Live samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let end = self.cursor;
        let begin = end - self.size() as u64;
        let slots = self.storage.slots();
        let mask = self.mask;
        (begin..end).map(move |i| slots[(i as usize) & mask])
    }
}

impl<T: Sample, const N: usize, M: MinMaxTracker<T>> MovingAverage<T, Inline<T, N>, M> {
    /// Create a window with inline storage of capacity `N`
    ///
    /// Fails to compile unless `N` is a nonzero power of two.
    pub fn fixed() -> Self {
        Self::from_storage(Inline::zeroed())
    }
}

impl<T: Sample, const N: usize, M: MinMaxTracker<T>> Default for MovingAverage<T, Inline<T, N>, M> {
    fn default() -> Self {
        Self::fixed()
    }
}

impl<T: Sample, S: Storage<T>, M: MinMaxTracker<T>> Extend<T> for MovingAverage<T, S, M> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl<T: Sample, S: Storage<T>, M: MinMaxTracker<T>> Accumulator for MovingAverage<T, S, M> {
    type Item = T;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn clear(&mut self) {
        MovingAverage::clear(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.storage.heap_bytes() + self.tracker.heap_bytes()
    }

    /// Samples added since the last clear, including evicted ones
    fn count(&self) -> u64 {
        self.cursor
    }
}
