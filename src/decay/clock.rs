//! Time sources for decaying accumulators

/// Source of the current time in whole seconds since a fixed epoch
///
/// The epoch is arbitrary. Readings should be non-decreasing for sane decay,
/// but nothing enforces it.
pub trait Clock {
    fn now_seconds(&self) -> u64;
}

/// Wall-clock seconds since the Unix epoch
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_seconds(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

impl<F: Fn() -> u64> Clock for F {
    #[inline]
    fn now_seconds(&self) -> u64 {
        self()
    }
}
