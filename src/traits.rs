//! Core traits for online accumulators
//!
//! Every accumulator implements the base [`Accumulator`] trait. Accumulators
//! whose partial results can be folded together additionally implement
//! [`Mergeable`].

use core::fmt::Debug;

/// Error raised when an accumulator is configured with invalid parameters
///
/// Configuration errors are reported before any state is touched, so the
/// caller can simply retry with valid arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Both a static (inline) and a dynamic (heap) capacity were given
    ConflictingCapacity {
        static_capacity: usize,
        dynamic_capacity: usize,
    },
    /// Neither a static nor a dynamic capacity was given
    MissingCapacity,
    /// Dynamic window capacity is not a power of two
    CapacityNotPowerOfTwo(usize),
    /// Decay window of zero seconds
    ZeroInterval,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ConflictingCapacity {
                static_capacity,
                dynamic_capacity,
            } => write!(
                f,
                "both static ({}) and dynamic ({}) capacity given",
                static_capacity, dynamic_capacity
            ),
            ConfigError::MissingCapacity => write!(f, "no window capacity given"),
            ConfigError::CapacityNotPowerOfTwo(c) => {
                write!(f, "dynamic capacity must be a power of 2, got {}", c)
            }
            ConfigError::ZeroInterval => write!(f, "interval must be > 0 seconds"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Core trait for all online accumulators
pub trait Accumulator: Clone + Debug {
    /// The type of sample this accumulator consumes
    type Item: ?Sized;

    /// Feed one sample
    fn update(&mut self, item: &Self::Item);

    /// Reset to the freshly constructed state
    fn clear(&mut self);

    /// Memory usage in bytes, including owned heap buffers
    fn size_bytes(&self) -> usize;

    /// Number of samples processed since construction or the last clear
    fn count(&self) -> u64;

    /// Check if no samples were processed
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Accumulators whose partial results can be combined
///
/// Typical use is one accumulator per producer (thread, shard, worker) and a
/// final fold into a single result.
pub trait Mergeable: Accumulator {
    /// Fold `other`'s samples into this accumulator
    fn merge(&mut self, other: &Self);

    /// Remove a previously merged `other` from this accumulator
    ///
    /// Only additive state is corrected. Extremes (min/max) cannot be
    /// recovered without per-sample history and keep their old values.
    fn unmerge(&mut self, other: &Self);
}
