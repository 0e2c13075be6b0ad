//! Sliding-window statistics
//!
//! This module provides accumulators over the most recent fixed-size suffix
//! of a stream. Windows are power-of-two ring buffers, so slot selection is a
//! mask instead of a division.
//!
//! # Example
//!
//! ```
//! use runstat::window::{Heap, LinearScan, MovingAverage};
//!
//! // Amortized O(1) min/max (default)
//! let mut fast = MovingAverage::<i64>::new(16).unwrap();
//!
//! // Rescan the window on each min/max query
//! let mut slow = MovingAverage::<i64, Heap<i64>, LinearScan>::new(16).unwrap();
//!
//! for latency in [12, 15, 9, 30, 11] {
//!     fast.add(latency);
//!     slow.add(latency);
//! }
//!
//! assert_eq!(fast.minmax(), (9, 30));
//! assert_eq!(fast.minmax(), slow.minmax());
//! ```

mod minmax;
mod moving_average;
mod sample;
mod storage;

pub use minmax::{LinearScan, MinMaxTracker, MonotonicDeque};
pub use moving_average::{FixedMovingAverage, MovingAverage};
pub use sample::Sample;
pub use storage::{Heap, Inline, Storage};
