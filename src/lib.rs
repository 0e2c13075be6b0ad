//! # Runstat
//!
//! Constant-memory, single-pass statistics over streams of numeric samples.
//!
//! Every accumulator is a plain value type: one `add` per sample, O(1)
//! queries, no allocation after construction.
//!
//! ## Features
//!
//! - **Running statistics**: count, sum, mean, min, max with [`RunningSum`]
//! - **Running variance**: Welford's numerically stable algorithm with
//!   [`RunningVariance`]
//! - **Sliding windows**: moving average with amortized O(1) min/max with
//!   [`MovingAverage`]
//! - **Time decay**: exponentially decayed average over irregular timestamps
//!   with [`WeightedAverage`]
//! - **Mergeability**: running accumulators fold together across producers
//!
//! ## Quick Start
//!
//! ```rust
//! use runstat::prelude::*;
//!
//! let mut stats = RunningVariance::new();
//! let mut window = MovingAverage::<f64>::new(4).unwrap();
//!
//! for x in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
//!     stats.add(x);
//!     window.add(x);
//! }
//!
//! assert_eq!(stats.mean(), 3.5);
//! assert_eq!(window.mean(), 4.5);
//! ```
//!
//! ## Multiple Producers
//!
//! Accumulators carry no synchronization. Give each producer its own
//! instance and fold them afterwards:
//!
//! ```rust
//! use runstat::statistics::RunningSum;
//! use runstat::traits::Mergeable;
//!
//! let mut worker1 = RunningSum::new();
//! let mut worker2 = RunningSum::new();
//!
//! worker1.add(1.0);
//! worker2.add(2.0);
//!
//! worker1.merge(&worker2);
//! assert_eq!(worker1.sum(), 3.0);
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families:
//! - `statistics` (default): running sum and variance
//! - `window` (default): sliding-window moving average
//! - `decay` (default): time-decayed weighted average
//! - `full`: enable all algorithm families
//!
//! Platform features:
//! - `std` (default): standard library support; without it the crate is
//!   `no_std` + `alloc` and uses `libm` for math

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub(crate) mod math;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

#[cfg(feature = "window")]
#[cfg_attr(docsrs, doc(cfg(feature = "window")))]
pub mod window;

#[cfg(feature = "decay")]
#[cfg_attr(docsrs, doc(cfg(feature = "decay")))]
pub mod decay;

pub mod prelude {
    pub use crate::traits::*;

    #[cfg(feature = "statistics")]
    pub use crate::statistics::{RunningSum, RunningVariance};

    #[cfg(feature = "window")]
    pub use crate::window::{FixedMovingAverage, MovingAverage};

    #[cfg(feature = "decay")]
    pub use crate::decay::{Clock, WeightedAverage};
}

#[cfg(feature = "statistics")]
pub use statistics::{RunningSum, RunningVariance};

#[cfg(feature = "window")]
pub use window::MovingAverage;

#[cfg(feature = "decay")]
pub use decay::WeightedAverage;
