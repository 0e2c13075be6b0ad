//! Exponentially time-decayed weighted average
//!
//! Each observation decays the previous average by
//! `alpha = exp(-elapsed_seconds / (window_seconds * 60))`, so irregular
//! sampling intervals are weighted by the time that actually passed rather
//! than by a fixed smoothing factor.

use super::Clock;
use crate::math;
use crate::traits::ConfigError;

/// Default averaging window in seconds
pub const DEFAULT_WINDOW_SECONDS: u64 = 15;

/// Running weighted average with continuous exponential decay
///
/// After a reset the stored average and timestamp are both zero, so the
/// first observation decays from `0.0` over `now_seconds` seconds. Callers
/// that need a clean seed should start their clock near zero or discard the
/// first result.
///
/// # Example
///
/// ```
/// use runstat::decay::WeightedAverage;
///
/// let mut avg = WeightedAverage::default();
/// let first = avg.calculate(100, 10.0);
/// let second = avg.calculate(115, 10.0);
///
/// assert!(first < second && second < 10.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedAverage {
    /// Seconds in the averaging window
    window_seconds: u64,
    /// Always `window_seconds * 60`
    denominator: f64,
    last_value: f64,
    last_weighted: f64,
    last_seconds: u64,
}

impl Default for WeightedAverage {
    fn default() -> Self {
        Self::reset(DEFAULT_WINDOW_SECONDS)
    }
}

impl WeightedAverage {
    /// Create an average over a window of `window_seconds`
    ///
    /// Returns an error if `window_seconds` is zero.
    pub fn new(window_seconds: u64) -> Result<Self, ConfigError> {
        if window_seconds == 0 {
            tracing::warn!("rejected weighted average window of 0 seconds");
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Self::reset(window_seconds))
    }

    fn reset(window_seconds: u64) -> Self {
        Self {
            window_seconds,
            denominator: window_seconds as f64 * 60.0,
            last_value: 0.0,
            last_weighted: 0.0,
            last_seconds: 0,
        }
    }

    /// Fold `value` observed at `now_seconds` into the average
    ///
    /// Returns the new weighted average. A timestamp earlier than the
    /// previous one is accepted and yields `alpha > 1`, pushing the result
    /// past the previous average. Unsigned-wrapping subtraction would instead
    /// give a huge elapsed time, `alpha ≈ 0` and a result equal to `value`.
    pub fn calculate(&mut self, now_seconds: u64, value: f64) -> f64 {
        let elapsed = now_seconds as f64 - self.last_seconds as f64;
        let alpha = math::exp(-elapsed / self.denominator);
        self.last_weighted = value + alpha * (self.last_weighted - value);
        self.last_value = value;
        self.last_seconds = now_seconds;
        self.last_weighted
    }

    /// [`calculate`](Self::calculate) stamped with `clock`'s current time
    pub fn observe<C: Clock + ?Sized>(&mut self, clock: &C, value: f64) -> f64 {
        self.calculate(clock.now_seconds(), value)
    }

    /// Reset the internal state, keeping the current window
    pub fn clear(&mut self) {
        *self = Self::reset(self.window_seconds);
    }

    /// Last observed raw value
    pub fn last_value(&self) -> f64 {
        self.last_value
    }

    /// Last computed weighted average
    pub fn last_weighted(&self) -> f64 {
        self.last_weighted
    }

    /// Timestamp of the last observation
    pub fn last_seconds(&self) -> u64 {
        self.last_seconds
    }

    /// Averaging window in seconds
    pub fn interval(&self) -> u64 {
        self.window_seconds
    }

    /// Decay denominator, `interval() * 60`
    pub fn denominator(&self) -> f64 {
        self.denominator
    }

    /// Change the averaging window
    ///
    /// The decay denominator is recomputed from the new window. The stored
    /// average and timestamp are kept.
    pub fn set_interval(&mut self, window_seconds: u64) -> Result<(), ConfigError> {
        if window_seconds == 0 {
            tracing::warn!("rejected weighted average window of 0 seconds");
            return Err(ConfigError::ZeroInterval);
        }

        let old = self.window_seconds;
        self.window_seconds = window_seconds;
        self.denominator = window_seconds as f64 * 60.0;
        tracing::debug!(
            old_seconds = old,
            new_seconds = window_seconds,
            denominator = self.denominator,
            "weighted average interval changed"
        );
        Ok(())
    }
}
