//! Time-decayed statistics
//!
//! This module provides averages whose memory of past samples fades with
//! elapsed time rather than with sample count. Time is supplied by the
//! caller, either as a raw timestamp or through a [`Clock`].
//!
//! # Example
//!
//! ```
//! use runstat::decay::WeightedAverage;
//!
//! let mut load = WeightedAverage::new(60).unwrap();
//!
//! // Irregularly spaced readings
//! for (t, value) in [(10, 0.5), (12, 0.7), (40, 0.2), (41, 0.9)] {
//!     load.calculate(t, value);
//! }
//!
//! println!("Weighted load: {}", load.last_weighted());
//! ```

mod clock;
mod weighted;

#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::Clock;
pub use weighted::{WeightedAverage, DEFAULT_WINDOW_SECONDS};
