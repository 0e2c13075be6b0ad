//! Correctness and invariant tests for runstat
//!
//! These tests verify invariants, merge semantics, and edge cases across all
//! accumulator families. They complement the unit tests in each module by
//! checking properties against straightforward oracles.
//!
//! Run with: cargo test --test correctness --features full

// Require all features
#[cfg(not(all(feature = "statistics", feature = "window", feature = "decay")))]
compile_error!(
    "Correctness tests require all features. Run: cargo test --test correctness --features full"
);

use proptest::prelude::*;

use runstat::decay::WeightedAverage;
use runstat::statistics::{RunningSum, RunningVariance};
use runstat::traits::{Accumulator, ConfigError, Mergeable};
use runstat::window::{FixedMovingAverage, Heap, LinearScan, MovingAverage};

fn two_pass_variance(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    xs.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n
}

fn close(actual: f64, expected: f64, rel: f64) -> bool {
    (actual - expected).abs() <= rel * expected.abs().max(1.0)
}

// ============================================================================
// Running Sum
// ============================================================================

mod running_sum {
    use super::*;

    #[test]
    fn concrete_scenario() {
        let mut s = RunningSum::new();
        for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
            s.add(x);
        }

        assert_eq!(s.count(), 5);
        assert_eq!(s.sum(), 15.0);
        assert_eq!(s.mean(), 3.0);
        assert_eq!(s.min(), 1.0);
        assert_eq!(s.max(), 5.0);
        assert_eq!(s.last(), 5.0);
    }

    #[test]
    fn clear_restores_initial_observable_state() {
        let mut s: RunningSum = (0..100).map(|i| i as f64 - 50.0).collect();
        s.clear();

        assert_eq!(s.count(), 0);
        assert_eq!(s.sum(), 0.0);
        assert_eq!(s.mean(), 0.0);
        assert_eq!(s.min(), 0.0);
        assert_eq!(s.max(), 0.0);
        assert!(s.empty());
    }

    #[test]
    fn shard_fold_equals_single_stream() {
        let data: Vec<f64> = (0..1000).map(|i| ((i * 37) % 101) as f64 - 50.0).collect();
        let whole: RunningSum = data.iter().copied().collect();

        let mut folded = RunningSum::new();
        for chunk in data.chunks(64) {
            let shard: RunningSum = chunk.iter().copied().collect();
            folded.merge(&shard);
        }

        assert_eq!(folded.count(), whole.count());
        assert!(close(folded.sum(), whole.sum(), 1e-12));
        assert_eq!(folded.min(), whole.min());
        assert_eq!(folded.max(), whole.max());
    }

    proptest! {
        #[test]
        fn matches_direct_computation(xs in prop::collection::vec(-1e6f64..1e6, 1..200)) {
            let s: RunningSum = xs.iter().copied().collect();

            let sum: f64 = xs.iter().sum();
            let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
            let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            prop_assert_eq!(s.count(), xs.len() as u64);
            prop_assert!(close(s.sum(), sum, 1e-9));
            prop_assert_eq!(s.min(), min);
            prop_assert_eq!(s.max(), max);
            prop_assert_eq!(s.last(), *xs.last().unwrap());
            for &x in &xs {
                prop_assert!(s.min() <= x && x <= s.max());
            }
        }
    }
}

// ============================================================================
// Running Variance
// ============================================================================

mod running_variance {
    use super::*;

    #[test]
    fn long_stream_matches_two_pass() {
        let xs: Vec<f64> = (0..200_000u64)
            .map(|i| 1e3 + ((i * 7919) % 1000) as f64 / 10.0)
            .collect();
        let v: RunningVariance = xs.iter().copied().collect();

        let expected = two_pass_variance(&xs);
        assert!(
            close(v.variance(), expected, 1e-9),
            "variance: {} expected: {}",
            v.variance(),
            expected
        );
        assert!(close(v.deviation(), expected.sqrt(), 1e-9));
    }

    #[test]
    fn population_not_sample_variance() {
        let v: RunningVariance = [1.0, 3.0].into_iter().collect();
        assert_eq!(v.variance(), 1.0);
        assert_eq!(v.sample_variance(), 2.0);
    }

    #[test]
    fn clear_restores_initial_observable_state() {
        let mut v: RunningVariance = [3.0, 9.0, -4.0].into_iter().collect();
        v.clear();

        assert_eq!(v.count(), 0);
        assert_eq!(v.sum(), 0.0);
        assert_eq!(v.mean(), 0.0);
        assert_eq!(v.min(), 0.0);
        assert_eq!(v.max(), 0.0);
        assert_eq!(v.variance(), 0.0);
        assert_eq!(v.deviation(), 0.0);
    }

    #[test]
    fn unmerge_keeps_stale_extremes() {
        let mut a: RunningVariance = [1.0, 2.0].into_iter().collect();
        let b: RunningVariance = [-50.0, 50.0].into_iter().collect();

        a.merge(&b);
        a.unmerge(&b);

        assert_eq!(a.count(), 2);
        assert!(close(a.variance(), 0.25, 1e-12));
        assert_eq!(a.min(), -50.0);
        assert_eq!(a.max(), 50.0);
    }

    proptest! {
        #[test]
        fn welford_matches_two_pass(xs in prop::collection::vec(-1e3f64..1e3, 1..500)) {
            let v: RunningVariance = xs.iter().copied().collect();
            prop_assert!(
                close(v.variance(), two_pass_variance(&xs), 1e-9),
                "variance {} vs {}",
                v.variance(),
                two_pass_variance(&xs)
            );
        }

        #[test]
        fn merge_matches_concatenation(
            left in prop::collection::vec(-1e3f64..1e3, 0..100),
            right in prop::collection::vec(-1e3f64..1e3, 0..100),
        ) {
            let mut a: RunningVariance = left.iter().copied().collect();
            let b: RunningVariance = right.iter().copied().collect();
            a.merge(&b);

            let all: Vec<f64> = left.iter().chain(right.iter()).copied().collect();
            prop_assert_eq!(a.count(), all.len() as u64);
            prop_assert!(close(a.variance(), two_pass_variance(&all), 1e-9));
        }
    }
}

// ============================================================================
// Moving Average
// ============================================================================

mod moving_average {
    use super::*;

    #[test]
    fn concrete_scenario() {
        let mut avg = FixedMovingAverage::<f64, 4>::fixed();
        for x in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
            avg.add(x);
        }

        assert_eq!(avg.size(), 4);
        assert_eq!(avg.iter().collect::<Vec<_>>(), vec![3.0, 4.0, 5.0, 6.0]);
        assert_eq!(avg.sum(), 18.0);
        assert_eq!(avg.mean(), 4.5);
        assert_eq!(avg.min(), 3.0);
        assert_eq!(avg.max(), 6.0);
    }

    #[test]
    fn construction_validation() {
        assert!(matches!(
            FixedMovingAverage::<f64, 8>::new(8),
            Err(ConfigError::ConflictingCapacity { .. })
        ));
        assert_eq!(
            MovingAverage::<f64>::new(6).unwrap_err(),
            ConfigError::CapacityNotPowerOfTwo(6)
        );

        let avg = MovingAverage::<f64>::new(8).unwrap();
        assert_eq!(avg.capacity(), 8);
    }

    #[test]
    fn clear_restores_initial_observable_state() {
        let mut avg = MovingAverage::<f64>::new(4).unwrap();
        avg.extend([5.0, 1.0, 7.0, 3.0, 2.0]);
        avg.clear();

        let fresh = MovingAverage::<f64>::new(4).unwrap();
        assert_eq!(avg.size(), fresh.size());
        assert_eq!(avg.sum(), fresh.sum());
        assert_eq!(avg.mean(), fresh.mean());
        assert_eq!(avg.last(), fresh.last());
        assert_eq!(avg.minmax(), fresh.minmax());
        assert!(Accumulator::is_empty(&avg));
    }

    #[test]
    fn descending_then_ascending() {
        let mut fast = MovingAverage::<i32>::new(8).unwrap();
        let mut slow = MovingAverage::<i32, Heap<i32>, LinearScan>::new(8).unwrap();

        for x in (0..100).rev().chain(0..100) {
            fast.add(x);
            slow.add(x);
            assert_eq!(fast.minmax(), slow.minmax());
        }
        assert_eq!(fast.minmax(), (92, 99));
    }

    proptest! {
        #[test]
        fn window_matches_oracle(
            log2_capacity in 0u32..6,
            xs in prop::collection::vec(-1000i64..1000, 1..300),
        ) {
            let capacity = 1usize << log2_capacity;
            let mut fast = MovingAverage::<i64>::new(capacity).unwrap();
            let mut slow = MovingAverage::<i64, Heap<i64>, LinearScan>::new(capacity).unwrap();

            for (n, &x) in xs.iter().enumerate() {
                fast.add(x);
                slow.add(x);

                let start = (n + 1).saturating_sub(capacity);
                let live = &xs[start..=n];
                let lo = *live.iter().min().unwrap();
                let hi = *live.iter().max().unwrap();

                prop_assert_eq!(fast.size(), live.len());
                prop_assert_eq!(fast.sum(), live.iter().sum::<i64>());
                prop_assert_eq!(fast.minmax(), (lo, hi));
                prop_assert_eq!(slow.minmax(), (lo, hi));
                prop_assert_eq!(fast.iter().collect::<Vec<_>>(), live.to_vec());
            }
        }

        #[test]
        fn unsigned_window_sum_wraps_like_oracle(
            log2_capacity in 0u32..6,
            xs in prop::collection::vec(any::<u8>(), 1..300),
        ) {
            let capacity = 1usize << log2_capacity;
            let mut avg = MovingAverage::<u8>::new(capacity).unwrap();

            for (n, &x) in xs.iter().enumerate() {
                avg.add(x);

                let start = (n + 1).saturating_sub(capacity);
                let live = &xs[start..=n];
                let sum = live.iter().fold(0u8, |acc, &v| acc.wrapping_add(v));
                let exact: u64 = live.iter().map(|&v| v as u64).sum();

                prop_assert_eq!(avg.sum(), sum);
                if exact <= u8::MAX as u64 {
                    prop_assert_eq!(avg.sum() as u64, exact);
                }
                prop_assert_eq!(
                    avg.minmax(),
                    (*live.iter().min().unwrap(), *live.iter().max().unwrap())
                );
            }
        }

        #[test]
        fn signed_window_sum_wraps_like_oracle(
            log2_capacity in 0u32..6,
            xs in prop::collection::vec(any::<i8>(), 1..300),
        ) {
            let capacity = 1usize << log2_capacity;
            let mut avg = MovingAverage::<i8>::new(capacity).unwrap();

            for (n, &x) in xs.iter().enumerate() {
                avg.add(x);

                let start = (n + 1).saturating_sub(capacity);
                let live = &xs[start..=n];
                let sum = live.iter().fold(0i8, |acc, &v| acc.wrapping_add(v));
                let exact: i64 = live.iter().map(|&v| v as i64).sum();

                prop_assert_eq!(avg.sum(), sum);
                if (i8::MIN as i64..=i8::MAX as i64).contains(&exact) {
                    prop_assert_eq!(avg.sum() as i64, exact);
                }
                prop_assert_eq!(
                    avg.minmax(),
                    (*live.iter().min().unwrap(), *live.iter().max().unwrap())
                );
            }
        }

        #[test]
        fn trackers_agree_bitwise(
            log2_capacity in 0u32..6,
            xs in prop::collection::vec(
                prop_oneof![Just(0.0f64), Just(-0.0f64), -10.0f64..10.0],
                1..300,
            ),
        ) {
            let capacity = 1usize << log2_capacity;
            let mut fast = MovingAverage::<f64>::new(capacity).unwrap();
            let mut slow = MovingAverage::<f64, Heap<f64>, LinearScan>::new(capacity).unwrap();

            for &x in &xs {
                fast.add(x);
                slow.add(x);
                let (a, b) = (fast.minmax(), slow.minmax());
                prop_assert_eq!(a.0.to_bits(), b.0.to_bits());
                prop_assert_eq!(a.1.to_bits(), b.1.to_bits());
            }
        }
    }
}

// ============================================================================
// Weighted Average
// ============================================================================

mod weighted_average {
    use super::*;

    #[test]
    fn concrete_scenario() {
        let mut avg = WeightedAverage::new(15).unwrap();
        let first = avg.calculate(100, 10.0);
        let second = avg.calculate(115, 10.0);

        assert!(first < second && second < 10.0);

        let later = avg.calculate(115 + 10 * 900, 10.0);
        assert!(later > second && (10.0 - later) < 1e-3);
    }

    #[test]
    fn denominator_tracks_interval() {
        let mut avg = WeightedAverage::default();
        for seconds in [1, 7, 60, 3600] {
            avg.set_interval(seconds).unwrap();
            assert_eq!(avg.denominator(), seconds as f64 * 60.0);
        }
        avg.clear();
        assert_eq!(avg.denominator(), 3600.0 * 60.0);
    }

    #[test]
    fn clear_restores_initial_observable_state() {
        let mut avg = WeightedAverage::new(30).unwrap();
        avg.calculate(10, 1.0);
        avg.calculate(20, 2.0);
        avg.clear();

        assert_eq!(avg, WeightedAverage::new(30).unwrap());
    }

    proptest! {
        #[test]
        fn stays_between_previous_and_input(
            window in 1u64..120,
            steps in prop::collection::vec((0u64..600, -100.0f64..100.0), 1..50),
        ) {
            let mut avg = WeightedAverage::new(window).unwrap();
            let mut now = 0u64;
            for (dt, value) in steps {
                let prev = avg.last_weighted();
                now += dt;
                let w = avg.calculate(now, value);
                let (lo, hi) = if prev < value { (prev, value) } else { (value, prev) };
                prop_assert!(w >= lo - 1e-9 && w <= hi + 1e-9);
            }
        }
    }
}
