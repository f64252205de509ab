use araceae::signal::{Filter, FirFilter, FlankDetector, Level, MovingAverageFilter, Strictness};
use nalgebra::DVector;
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn moving_average_settles_on_constant_input(
        window in 1usize..32,
        initial in -1e3f64..1e3,
        c in -1e3f64..1e3,
        extra in 0usize..16
    ) {
        let mut filter = MovingAverageFilter::new(window, initial).unwrap();
        for _ in 0..window {
            filter.process(c);
        }
        // The settled mean is c up to rounding, then never moves again
        let settled = filter.value();
        prop_assert!(close(settled, c));
        for _ in 0..=extra {
            prop_assert_eq!(filter.process(c), settled);
        }
    }

    #[test]
    fn unit_gain_fir_settles_on_constant_input(
        raw in prop::collection::vec(0.01f64..1.0, 1..16),
        c in -1e3f64..1e3
    ) {
        let total: f64 = raw.iter().sum();
        let weights = DVector::from_vec(raw) / total;
        let taps = weights.len();
        let mut filter = FirFilter::new(weights, 0.0).unwrap();
        for _ in 0..taps {
            filter.process(c);
        }
        prop_assert!(close(filter.value(), c));
    }

    #[test]
    fn equal_weight_fir_matches_moving_average(
        window in 1usize..16,
        initial in -100f64..100.0,
        samples in prop::collection::vec(-100f64..100.0, 0..64)
    ) {
        let mut fir = FirFilter::moving_average(window, initial).unwrap();
        let mut sma = MovingAverageFilter::new(window, initial).unwrap();
        for sample in samples {
            prop_assert!(close(fir.process(sample), sma.process(sample)));
        }
    }

    #[test]
    fn locked_filter_ignores_input(
        window in 1usize..8,
        before in prop::collection::vec(-10f64..10.0, 1..16),
        during in prop::collection::vec(-10f64..10.0, 1..16)
    ) {
        let mut filter = MovingAverageFilter::new(window, 0.0).unwrap();
        for &sample in &before {
            filter.process(sample);
        }
        let frozen = filter.value();
        let history = filter.history();

        filter.lock();
        for &sample in &during {
            prop_assert_eq!(filter.process(sample), frozen);
        }
        prop_assert_eq!(filter.history(), history);
    }

    #[test]
    fn lenient_undefined_never_changes_level(
        inputs in prop::collection::vec(0u8..4, 1..64)
    ) {
        // 0 is low, 1 is high, everything else is undefined
        let mut detector = FlankDetector::binary(0u8, 1u8);
        let mut expected = Level::Low;
        for value in inputs {
            let classified = detector.classify(&value, Strictness::Lenient).unwrap();
            match value {
                0 => expected = Level::Low,
                1 => expected = Level::High,
                _ => prop_assert_eq!(classified, None),
            }
            prop_assert_eq!(detector.last_level(), expected);
        }
    }
}
