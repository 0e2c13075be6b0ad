//! Running statistics over a whole stream
//!
//! This module provides accumulators that summarize every sample seen since
//! construction (or the last clear) in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use runstat::statistics::RunningVariance;
//!
//! let mut stats = RunningVariance::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.add(value);
//! }
//!
//! println!("Mean: {}", stats.mean());
//! println!("Deviation: {}", stats.deviation());
//! println!("Min: {}", stats.min());
//! println!("Max: {}", stats.max());
//! ```

mod sum;
mod variance;

pub use sum::RunningSum;
pub use variance::RunningVariance;
