use bitter_lesson::{general_method, general_method_with, specialized_method, Curve};
use proptest::prelude::*;

fn arb_curve() -> impl Strategy<Value = Curve> {
    prop_oneof![Just(Curve::Linear), Just(Curve::Logarithmic)]
}

proptest! {
    #[test]
    fn specialized_ignores_input(size in any::<u64>()) {
        prop_assert_eq!(specialized_method(size), 0.70);
    }

    #[test]
    fn general_is_clamped(
        size in 1u64..1_000_000,
        time in 0.0f64..1000.0,
        speed in 1.0f64..100_000.0,
        curve in arb_curve(),
    ) {
        let q = general_method_with(size, time, speed, curve).unwrap();
        prop_assert!((0.0..=1.0).contains(&q));
    }

    #[test]
    fn more_time_never_hurts(
        size in 1u64..1_000_000,
        t1 in 0.0f64..100.0,
        dt in 0.0f64..100.0,
        curve in arb_curve(),
    ) {
        let a = general_method_with(size, t1, 1000.0, curve).unwrap();
        let b = general_method_with(size, t1 + dt, 1000.0, curve).unwrap();
        prop_assert!(b >= a);
    }

    #[test]
    fn larger_problems_never_score_higher(
        n1 in 1u64..1_000_000,
        dn in 0u64..1_000_000,
        time in 0.0f64..100.0,
        curve in arb_curve(),
    ) {
        let small = general_method_with(n1, time, 1000.0, curve).unwrap();
        let large = general_method_with(n1 + dn, time, 1000.0, curve).unwrap();
        prop_assert!(large <= small);
    }

    #[test]
    fn zero_time_scores_zero(size in 1u64..u64::MAX, curve in arb_curve()) {
        prop_assert_eq!(general_method_with(size, 0.0, 1000.0, curve).unwrap(), 0.0);
    }

    #[test]
    fn negative_time_is_rejected(size in 1u64..1_000_000, time in -1000.0f64..-1e-9) {
        prop_assert!(general_method(size, time).is_err());
    }
}

#[test]
fn linear_scenario() {
    let q = general_method(5000, 1.0).unwrap();
    assert_eq!(format!("{:.2}", q), "0.20");
}

#[test]
fn log_scenario() {
    let q = general_method_with(5000, 1.0, 1000.0, Curve::Logarithmic).unwrap();
    assert_eq!(format!("{:.2}", q), "1.00");
}

#[test]
fn zero_size_is_rejected() {
    let err = general_method(0, 1.0).unwrap_err();
    assert!(err.to_string().starts_with("problem size must be positive"));
}
