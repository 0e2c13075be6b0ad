//! Backing storage for sliding windows
//!
//! A window owns exactly one contiguous buffer, sized once at construction.
//! [`Inline`] keeps it inside the accumulator with a capacity fixed by the
//! type, [`Heap`] allocates it with a capacity chosen at run time.

use super::Sample;
use crate::traits::ConfigError;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec};

/// Fixed-length slot buffer owned by a window
pub trait Storage<T: Sample>: Clone + core::fmt::Debug {
    /// Capacity fixed by the type, `0` for run-time sized storage
    const STATIC_CAPACITY: usize;

    /// Allocate zeroed slots
    ///
    /// `dynamic_capacity` is the run-time capacity requested by the caller,
    /// `0` when none is given.
    fn allocate(dynamic_capacity: usize) -> Result<Self, ConfigError>;

    fn slots(&self) -> &[T];

    fn slots_mut(&mut self) -> &mut [T];

    /// Bytes owned outside the accumulator itself
    fn heap_bytes(&self) -> usize {
        0
    }
}

/// Inline storage with compile-time capacity `N`
///
/// `N` must be a nonzero power of two. Other values fail to compile as soon
/// as the storage is instantiated.
#[derive(Clone, Debug)]
pub struct Inline<T, const N: usize>([T; N]);

impl<T: Sample, const N: usize> Inline<T, N> {
    const POWER_OF_TWO: () = assert!(
        N.is_power_of_two(),
        "inline window capacity must be a nonzero power of 2"
    );

    pub(crate) fn zeroed() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::POWER_OF_TWO;
        Inline([T::ZERO; N])
    }
}

impl<T: Sample, const N: usize> Storage<T> for Inline<T, N> {
    const STATIC_CAPACITY: usize = N;

    fn allocate(dynamic_capacity: usize) -> Result<Self, ConfigError> {
        if dynamic_capacity != 0 {
            return Err(ConfigError::ConflictingCapacity {
                static_capacity: N,
                dynamic_capacity,
            });
        }
        Ok(Self::zeroed())
    }

    #[inline]
    fn slots(&self) -> &[T] {
        &self.0
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Heap storage with a run-time power-of-two capacity
#[derive(Clone, Debug)]
pub struct Heap<T>(Box<[T]>);

impl<T: Sample> Storage<T> for Heap<T> {
    const STATIC_CAPACITY: usize = 0;

    fn allocate(dynamic_capacity: usize) -> Result<Self, ConfigError> {
        if dynamic_capacity == 0 {
            return Err(ConfigError::MissingCapacity);
        }
        if !dynamic_capacity.is_power_of_two() {
            return Err(ConfigError::CapacityNotPowerOfTwo(dynamic_capacity));
        }
        Ok(Heap(vec![T::ZERO; dynamic_capacity].into_boxed_slice()))
    }

    #[inline]
    fn slots(&self) -> &[T] {
        &self.0
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        &mut self.0
    }

    fn heap_bytes(&self) -> usize {
        self.0.len() * core::mem::size_of::<T>()
    }
}
