//! Running variance using Welford's online algorithm
//!
//! Extends [`RunningSum`] with the sum of squared deviations from the running
//! mean. Partial results merge with the parallel formula of Chan et al.

use core::ops::{AddAssign, SubAssign};

use super::RunningSum;
use crate::math;
use crate::traits::{Accumulator, Mergeable};

/// Running count / sum / extremes plus population variance
///
/// Uses Welford's algorithm (Knuth TAOCP vol. 2, 3rd ed., p. 232), which
/// stays stable on long streams where the naive sum-of-squares formula
/// loses precision to cancellation.
///
/// # Example
///
/// ```
/// use runstat::statistics::RunningVariance;
///
/// let mut var = RunningVariance::new();
/// for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     var.add(x);
/// }
///
/// assert!((var.mean() - 5.0).abs() < 1e-12);
/// assert!((var.variance() - 4.0).abs() < 1e-12);
/// assert!((var.deviation() - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RunningVariance {
    base: RunningSum,
    /// Sum of squared differences from the mean (M2)
    m2: f64,
}

impl Default for RunningVariance {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningVariance {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            base: RunningSum::new(),
            m2: 0.0,
        }
    }

    /// Add a sample
    #[inline]
    pub fn add(&mut self, x: f64) {
        let old_mean = self.base.mean();
        self.base.add(x);
        let diff = x - old_mean;
        if diff != 0.0 {
            self.m2 += diff * (x - self.base.mean());
        }
    }

    /// Fold an independently accumulated instance into this one
    ///
    /// The merged variance is that of the concatenated streams.
    pub fn merge_add(&mut self, other: &Self) {
        let na = self.base.count() as f64;
        let nb = other.base.count() as f64;
        if nb == 0.0 {
            return;
        }

        let delta = other.base.mean() - self.base.mean();
        self.m2 += other.m2 + delta * delta * (na * nb / (na + nb));
        self.base.merge_add(&other.base);
    }

    /// Remove a previously merged instance
    ///
    /// Count, sum and variance are corrected. `min` and `max` keep their old
    /// values, as with [`RunningSum::merge_subtract`].
    pub fn merge_subtract(&mut self, other: &Self) {
        let n = self.base.count();
        let nb = other.base.count();
        if nb == 0 {
            return;
        }
        if nb >= n {
            self.base.merge_subtract(&other.base);
            self.m2 = 0.0;
            return;
        }

        let na = (n - nb) as f64;
        let nb = nb as f64;
        let mean_a = (self.base.sum() - other.base.sum()) / na;
        let delta = other.base.mean() - mean_a;
        let m2 = self.m2 - other.m2 - delta * delta * (na * nb / (na + nb));
        // rounding can push a near-zero M2 slightly negative
        self.m2 = if m2 < 0.0 { 0.0 } else { m2 };
        self.base.merge_subtract(&other.base);
    }

    /// Reset the internal state
    pub fn clear(&mut self) {
        self.base.clear();
        self.m2 = 0.0;
    }

    /// Population variance (denominator `count`), `0.0` when empty
    pub fn variance(&self) -> f64 {
        let n = self.base.count();
        if n == 0 {
            0.0
        } else {
            self.m2 / n as f64
        }
    }

    /// Population standard deviation
    pub fn deviation(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Sample variance (denominator `count - 1`), `0.0` for fewer than two samples
    pub fn sample_variance(&self) -> f64 {
        let n = self.base.count();
        if n < 2 {
            0.0
        } else {
            self.m2 / (n - 1) as f64
        }
    }

    /// Sample standard deviation
    pub fn sample_deviation(&self) -> f64 {
        math::sqrt(self.sample_variance())
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.base.count()
    }

    #[inline]
    pub fn empty(&self) -> bool {
        self.base.empty()
    }

    #[inline]
    pub fn last(&self) -> f64 {
        self.base.last()
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.base.sum()
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.base.mean()
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.base.min()
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.base.max()
    }

    pub fn range(&self) -> f64 {
        self.base.range()
    }
}

impl AsRef<RunningSum> for RunningVariance {
    fn as_ref(&self) -> &RunningSum {
        &self.base
    }
}

impl AddAssign<&RunningVariance> for RunningVariance {
    fn add_assign(&mut self, rhs: &RunningVariance) {
        self.merge_add(rhs);
    }
}

impl SubAssign<&RunningVariance> for RunningVariance {
    fn sub_assign(&mut self, rhs: &RunningVariance) {
        self.merge_subtract(rhs);
    }
}

impl Extend<f64> for RunningVariance {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<f64> for RunningVariance {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl Accumulator for RunningVariance {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn clear(&mut self) {
        RunningVariance::clear(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.base.count()
    }
}

impl Mergeable for RunningVariance {
    fn merge(&mut self, other: &Self) {
        self.merge_add(other);
    }

    fn unmerge(&mut self, other: &Self) {
        self.merge_subtract(other);
    }
}
