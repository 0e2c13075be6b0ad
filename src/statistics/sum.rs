//! Running count / sum / last / min / max

use core::ops::{AddAssign, SubAssign};

use crate::traits::{Accumulator, Mergeable};

/// Cumulative count, sum, last sample and extremes of a stream
///
/// Every query is O(1). Queries on an empty accumulator return `0.0`
/// instead of failing.
///
/// # Example
///
/// ```
/// use runstat::statistics::RunningSum;
///
/// let mut sum = RunningSum::new();
/// for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
///     sum.add(x);
/// }
///
/// assert_eq!(sum.count(), 5);
/// assert_eq!(sum.sum(), 15.0);
/// assert_eq!(sum.mean(), 3.0);
/// assert_eq!(sum.min(), 1.0);
/// assert_eq!(sum.max(), 5.0);
/// assert_eq!(sum.last(), 5.0);
/// ```
///
/// # Per-shard accumulation
///
/// ```
/// use runstat::statistics::RunningSum;
///
/// let mut shard1: RunningSum = [1.0, 2.0, 3.0].into_iter().collect();
/// let shard2: RunningSum = [4.0, 5.0, 6.0].into_iter().collect();
///
/// shard1 += &shard2;
/// assert_eq!(shard1.count(), 6);
/// assert_eq!(shard1.max(), 6.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RunningSum {
    count: u64,
    last: f64,
    sum: f64,
    /// `+inf` until the first sample
    min: f64,
    /// `-inf` until the first sample
    max: f64,
}

impl Default for RunningSum {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningSum {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            last: 0.0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a sample
    #[inline]
    pub fn add(&mut self, x: f64) {
        self.count += 1;
        self.last = x;
        self.sum += x;
        if x > self.max {
            self.max = x;
        }
        if x < self.min {
            self.min = x;
        }
    }

    /// Fold an independently accumulated instance into this one
    ///
    /// Counts and sums are added, extremes are combined. `last` is left as is.
    pub fn merge_add(&mut self, other: &Self) {
        self.count += other.count;
        self.sum += other.sum;
        if other.max > self.max {
            self.max = other.max;
        }
        if other.min < self.min {
            self.min = other.min;
        }
    }

    /// Remove a previously merged instance
    ///
    /// Only count and sum are adjusted. `min` and `max` still reflect the
    /// samples that were removed, so they must not be relied on afterwards.
    pub fn merge_subtract(&mut self, other: &Self) {
        self.count = self.count.saturating_sub(other.count);
        self.sum -= other.sum;
    }

    /// Reset the internal state
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Number of samples since the last clear
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Check if no samples were added
    #[inline]
    pub fn empty(&self) -> bool {
        self.count == 0
    }

    /// Last sample added, `0.0` if none
    #[inline]
    pub fn last(&self) -> f64 {
        self.last
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Arithmetic mean, `0.0` when empty
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Smallest sample, `0.0` when empty
    #[inline]
    pub fn min(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.min
        }
    }

    /// Largest sample, `0.0` when empty
    #[inline]
    pub fn max(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.max
        }
    }

    /// `max() - min()`, `0.0` when empty
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }
}

impl AddAssign<&RunningSum> for RunningSum {
    fn add_assign(&mut self, rhs: &RunningSum) {
        self.merge_add(rhs);
    }
}

impl SubAssign<&RunningSum> for RunningSum {
    fn sub_assign(&mut self, rhs: &RunningSum) {
        self.merge_subtract(rhs);
    }
}

impl Extend<f64> for RunningSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<f64> for RunningSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl Accumulator for RunningSum {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn clear(&mut self) {
        RunningSum::clear(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Mergeable for RunningSum {
    fn merge(&mut self, other: &Self) {
        self.merge_add(other);
    }

    fn unmerge(&mut self, other: &Self) {
        self.merge_subtract(other);
    }
}
