//! Integration tests for the OS-backed generator.

use std::thread;

use randrange_core::{RangeError, generate_native};
use randrange_os::{OsPrimitive, random_int};
use randrange_test_support::{chi_square, tally};

/// Chi-square critical value at p = 0.0001 with 5 degrees of freedom.
const CHI_SQUARE_5_DOF: f64 = 25.745;

#[test]
fn test_random_int_within_bounds() {
    for _ in 0..1_000 {
        let value = random_int(-50_i64, 50).unwrap();
        assert!((-50..=50).contains(&value));
    }
}

#[test]
fn test_random_int_degenerate() {
    assert_eq!(random_int(0_i64, 0).unwrap(), 0);
    assert_eq!(random_int(-7_i32, -7).unwrap(), -7);
}

#[test]
fn test_random_int_rejects_inverted_range() {
    assert!(matches!(
        random_int(3_i64, 2),
        Err(RangeError::InvalidRange { min: 3, max: 2 })
    ));
}

#[test]
fn test_random_int_full_width_ranges() {
    for _ in 0..100 {
        random_int(i64::MIN, i64::MAX).unwrap();
        random_int(i32::MIN, i32::MAX).unwrap();
        generate_native(&mut OsPrimitive, isize::MIN, isize::MAX).unwrap();
    }
}

#[test]
fn test_random_int_wide_range() {
    for _ in 0..1_000 {
        let value = random_int(0_i64, 5_000_000_000).unwrap();
        assert!((0..=5_000_000_000).contains(&value));
    }
}

#[test]
fn test_die_roll_distribution() {
    let rolls = (0..60_000).map(|_| {
        let roll = random_int(1_i64, 6).unwrap();
        usize::try_from(roll - 1).unwrap()
    });
    let counts = tally(rolls, 6);
    let statistic = chi_square(&counts);
    assert!(
        statistic < CHI_SQUARE_5_DOF,
        "chi-square {statistic} for counts {counts:?}"
    );
}

#[test]
fn test_concurrent_callers_need_no_coordination() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let mut primitive = OsPrimitive;
                (0..500)
                    .map(|_| generate_native(&mut primitive, -1_000, 1_000))
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .collect();

    for handle in handles {
        let values = handle.join().unwrap().unwrap();
        assert!(values.iter().all(|v| (-1_000..=1_000).contains(v)));
    }
}
