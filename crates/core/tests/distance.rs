//! Conversion, ordering, and arithmetic behavior of `Distance`
use approx::assert_relative_eq;
use geometry_core::{Distance, DistanceUnit};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TEST_COUNT: usize = 1000;
const INPUT_VALUE: f64 = 2038.0;

/// Largest nanometer magnitude that stays exact in `f64`
const EXACT_NANOMETERS: f64 = 9.0e15;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The same 2038 km expressed in every unit
fn same_length_in_every_unit() -> [Distance; 6] {
    [
        Distance::new(INPUT_VALUE, DistanceUnit::Kilometer),
        Distance::new(INPUT_VALUE * 1.0e3, DistanceUnit::Meter),
        Distance::new(INPUT_VALUE * 1.0e5, DistanceUnit::Centimeter),
        Distance::new(INPUT_VALUE * 1.0e6, DistanceUnit::Millimeter),
        Distance::new(INPUT_VALUE * 1.0e9, DistanceUnit::Micrometer),
        Distance::new(INPUT_VALUE * 1.0e12, DistanceUnit::Nanometer),
    ]
}

/// 2038 in every unit, largest first
fn same_number_in_every_unit() -> [Distance; 6] {
    DistanceUnit::ALL.map(|unit| Distance::new(INPUT_VALUE, unit))
}

#[test]
fn test_copy_and_default() {
    let d1 = Distance::default();
    let d2 = d1;
    assert_eq!(d1, d2);
    assert_eq!(d2, Distance::ZERO);
}

#[test]
fn test_value_round_trips_in_every_unit() {
    for unit in DistanceUnit::ALL {
        let d = Distance::new(INPUT_VALUE, unit);
        assert_relative_eq!(d.value(unit), INPUT_VALUE, max_relative = 1e-12);
    }
}

#[test]
fn test_set_value_round_trips_in_every_unit() {
    for unit in DistanceUnit::ALL {
        let mut d = Distance::default();
        d.set_value(INPUT_VALUE, unit);
        assert_relative_eq!(d.value(unit), INPUT_VALUE, max_relative = 1e-12);
    }
}

#[test]
fn test_random_round_trip_within_one_nanometer() {
    let mut rng = StdRng::seed_from_u64(2038);
    for _ in 0..TEST_COUNT {
        for unit in DistanceUnit::ALL {
            let limit = EXACT_NANOMETERS * unit.units_per_nanometer();
            let value = rng.random_range(-limit..limit);
            let got = Distance::new(value, unit).value(unit);
            let tolerance = unit.units_per_nanometer() + 4.0 * f64::EPSILON * value.abs();
            assert!(
                (got - value).abs() <= tolerance,
                "{value} {unit} read back as {got}"
            );
        }
    }
}

#[test]
fn test_one_kilometer_in_every_unit_is_equal() {
    let km = Distance::new(1.0, DistanceUnit::Kilometer);
    assert_eq!(km, Distance::new(1000.0, DistanceUnit::Meter));
    assert_eq!(km, Distance::new(1.0e5, DistanceUnit::Centimeter));
    assert_eq!(km, Distance::new(1.0e6, DistanceUnit::Millimeter));
    assert_eq!(km, Distance::new(1.0e9, DistanceUnit::Micrometer));
    assert_eq!(km, Distance::new(1.0e12, DistanceUnit::Nanometer));
}

#[test]
fn test_equal_and_not_equal_across_units() {
    let [by_kilo, rest @ ..] = same_length_in_every_unit();
    for other in rest {
        let not_equal = by_kilo != other;
        assert!(by_kilo == other);
        assert!(!not_equal);
    }
}

#[test]
fn test_ordering_across_units() {
    let [by_kilo, rest @ ..] = same_number_in_every_unit();
    let same = by_kilo;
    assert!(by_kilo >= same);
    assert!(by_kilo <= same);
    for smaller in rest {
        assert!(by_kilo > smaller);
        assert!(by_kilo >= smaller);
        assert!(smaller < by_kilo);
        assert!(smaller <= by_kilo);
    }
}

#[test]
fn test_ordering_follows_value_in_same_unit() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..TEST_COUNT {
        for unit in DistanceUnit::ALL {
            // Whole numbers of the unit keep both sides exact
            let limit = (EXACT_NANOMETERS * unit.units_per_nanometer() / 2.0) as i64;
            let v1 = rng.random_range(-limit..limit) as f64;
            let v2 = v1 + rng.random_range(1..1000) as f64;
            let d1 = Distance::new(v1, unit);
            let d2 = Distance::new(v2, unit);
            let greater = d1 > d2;
            assert!(d1 < d2, "{v1} {unit} should be less than {v2} {unit}");
            assert!(!greater);
        }
    }
}

#[test]
fn test_add_across_units() {
    let [by_kilo, rest @ ..] = same_length_in_every_unit();
    for other in rest {
        let sum = by_kilo + other;
        assert_relative_eq!(
            sum.value(DistanceUnit::Kilometer),
            INPUT_VALUE * 2.0,
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_add_kilometers_and_meters() {
    let sum = Distance::new(2038.0, DistanceUnit::Kilometer)
        + Distance::new(2_038_000.0, DistanceUnit::Meter);
    assert_eq!(sum.value(DistanceUnit::Kilometer), 4076.0);
}

#[test]
fn test_subtract_across_units() {
    let [by_kilo, rest @ ..] = same_length_in_every_unit();
    for other in rest {
        let difference = by_kilo - other;
        assert_eq!(difference, Distance::ZERO);
        assert_eq!(difference.value(DistanceUnit::Kilometer), 0.0);
    }
}

#[test]
fn test_add_then_subtract_is_identity() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..TEST_COUNT {
        let d = Distance::from_nanometers(rng.random_range(-(1i64 << 60)..(1i64 << 60)));
        let d2 = Distance::from_nanometers(rng.random_range(-(1i64 << 60)..(1i64 << 60)));
        assert_eq!(d + d2 - d2, d);
    }
}

#[test]
fn test_multiply() {
    let [by_kilo, by_meter, _, _, _, by_nano] = same_length_in_every_unit();
    let cases = [(by_kilo, 2.0), (by_meter, 3.0), (by_nano, 5.0)];
    for (distance, scale) in cases {
        assert_relative_eq!(
            (distance * scale).value(DistanceUnit::Kilometer),
            INPUT_VALUE * scale,
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_divide() {
    let [by_kilo, by_meter, _, _, _, by_nano] = same_length_in_every_unit();
    let cases = [(by_kilo, 2.0), (by_meter, 3.0), (by_nano, 5.0)];
    for (distance, scale) in cases {
        assert_relative_eq!(
            (distance / scale).value(DistanceUnit::Kilometer),
            INPUT_VALUE / scale,
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_scaling_truncates_fractional_nanometers() {
    let d = Distance::from_nanometers(10);
    assert_eq!((d / 3.0).nanometers(), 3);
    assert_eq!((d * 0.15).nanometers(), 1);
    assert_eq!((Distance::from_nanometers(-10) / 3.0).nanometers(), -3);
}

#[test]
fn test_add_assign() {
    let mut d1 = Distance::new(INPUT_VALUE, DistanceUnit::Kilometer);
    let d2 = Distance::new(INPUT_VALUE * 2.0, DistanceUnit::Meter);
    d1 += d2;
    assert_relative_eq!(
        d1.value(DistanceUnit::Meter),
        INPUT_VALUE * 1002.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_subtract_assign() {
    let mut d1 = Distance::new(INPUT_VALUE, DistanceUnit::Kilometer);
    let d2 = Distance::new(INPUT_VALUE * 2.0, DistanceUnit::Meter);
    d1 -= d2;
    assert_relative_eq!(
        d1.value(DistanceUnit::Meter),
        INPUT_VALUE * 998.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_compound_assignment_matches_operators() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..TEST_COUNT {
        let d1 = Distance::from_meters(rng.random_range(-1.0e6..1.0e6));
        let d2 = Distance::from_meters(rng.random_range(-1.0e6..1.0e6));

        let mut added = d1;
        added += d2;
        assert_eq!(added, d1 + d2);

        let mut subtracted = d1;
        subtracted -= d2;
        assert_eq!(subtracted, d1 - d2);
    }
}

#[test]
fn test_try_new_accepts_what_new_builds_exactly() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..TEST_COUNT {
        for unit in DistanceUnit::ALL {
            let limit = EXACT_NANOMETERS * unit.units_per_nanometer();
            let value = rng.random_range(-limit..limit);
            assert_eq!(Distance::try_new(value, unit), Ok(Distance::new(value, unit)));
        }
    }
}
