//! Numeric sample types accepted by window accumulators

use core::fmt::Debug;

/// A numeric value that can be stored in a sliding window
///
/// `MIN` is the lowest representable value (`f64::MIN` for floats, not the
/// smallest positive one). `MIN`/`MAX` are reported as the extremes of an
/// empty window.
///
/// Running sums go through [`accumulate`](Sample::accumulate) and
/// [`evict`](Sample::evict). Integers wrap, so a transient overflow while a
/// sample replaces an older one cancels out as long as the live window's sum
/// is representable. Floats use plain `+`/`-`.
pub trait Sample: Copy + PartialOrd + Debug {
    const ZERO: Self;
    const MIN: Self;
    const MAX: Self;

    /// `self + sample`
    fn accumulate(self, sample: Self) -> Self;

    /// `self - sample`
    fn evict(self, sample: Self) -> Self;

    /// Lossy conversion used for means
    fn to_f64(self) -> f64;
}

macro_rules! impl_int_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                const ZERO: Self = 0;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn accumulate(self, sample: Self) -> Self {
                    self.wrapping_add(sample)
                }

                #[inline]
                fn evict(self, sample: Self) -> Self {
                    self.wrapping_sub(sample)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_float_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                const ZERO: Self = 0.0;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn accumulate(self, sample: Self) -> Self {
                    self + sample
                }

                #[inline]
                fn evict(self, sample: Self) -> Self {
                    self - sample
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_int_sample!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_sample!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(<f64 as Sample>::MIN, f64::MIN);
        assert_eq!(<f64 as Sample>::MAX, f64::MAX);
        assert_eq!(<u32 as Sample>::MIN, 0);
        assert_eq!(<i16 as Sample>::ZERO, 0);
        assert_eq!(7u8.to_f64(), 7.0);
        assert_eq!((-2.5f32).to_f64(), -2.5);
    }

    #[test]
    fn test_integer_sums_wrap() {
        assert_eq!(200u8.accumulate(100), 44);
        assert_eq!(44u8.evict(200), 100);
        assert_eq!(120i8.accumulate(10).evict(120), 10);
        assert_eq!((-120i8).accumulate(-10).evict(-120), -10);
    }

    #[test]
    fn test_float_sums_are_plain() {
        assert_eq!(1.5f64.accumulate(2.25), 3.75);
        assert_eq!(3.75f32.evict(2.25), 1.5);
        assert_eq!(f64::MAX.accumulate(f64::MAX), f64::INFINITY);
    }
}
