#![allow(
    clippy::arithmetic_side_effects,
    reason = "Tests compute expected values with plain arithmetic"
)]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn n(v: i64) -> Number {
    Number::new(v)
}

mod division {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(n(8).checked_div(n(3)), Some(n(2)));
        assert_eq!(n(-8).checked_div(n(3)), Some(n(-2)));
        assert_eq!(n(8).checked_div(n(-3)), Some(n(-2)));
        assert_eq!(n(-8).checked_div(n(-3)), Some(n(2)));
    }

    #[test]
    fn small_over_large_is_zero() {
        assert_eq!(n(5).checked_div(n(8)), Some(n(0)));
        assert_eq!(n(-5).checked_div(n(8)), Some(n(0)));
        assert_eq!(n(5).checked_div(n(-8)), Some(n(0)));
    }

    #[test]
    fn zero_divisor_and_overflow_are_none() {
        assert_eq!(n(1).checked_div(n(0)), None);
        assert_eq!(Number::MIN.checked_div(n(-1)), None);
    }
}

mod modulo {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sign_follows_divisor() {
        assert_eq!(n(8).checked_modulo(n(5)), Some(n(3)));
        assert_eq!(n(8).checked_modulo(n(-5)), Some(n(-2)));
        assert_eq!(n(-8).checked_modulo(n(5)), Some(n(2)));
        assert_eq!(n(-8).checked_modulo(n(-5)), Some(n(-3)));
    }

    #[test]
    fn dividend_smaller_than_divisor() {
        assert_eq!(n(5).checked_modulo(n(8)), Some(n(5)));
        assert_eq!(n(5).checked_modulo(n(-8)), Some(n(-3)));
        assert_eq!(n(-5).checked_modulo(n(8)), Some(n(3)));
        assert_eq!(n(-5).checked_modulo(n(-8)), Some(n(-5)));
    }

    #[test]
    fn exact_multiples_are_zero() {
        assert_eq!(n(-10).checked_modulo(n(5)), Some(n(0)));
        assert_eq!(n(10).checked_modulo(n(-5)), Some(n(0)));
    }

    #[test]
    fn extremes() {
        assert_eq!(n(1).checked_modulo(n(0)), None);
        assert_eq!(Number::MIN.checked_modulo(n(-1)), Some(n(0)));
        assert_eq!(Number::MIN.checked_modulo(Number::MAX), Some(n(i64::MAX - 1)));
    }
}

mod power {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_exponent_is_one() {
        assert_eq!(n(0).checked_pow(n(0)), Some(n(1)));
        assert_eq!(n(7).checked_pow(n(0)), Some(n(1)));
        assert_eq!(n(-7).checked_pow(n(0)), Some(n(1)));
    }

    #[test]
    fn zero_base_is_zero() {
        assert_eq!(n(0).checked_pow(n(3)), Some(n(0)));
    }

    #[test]
    fn basic_powers() {
        assert_eq!(n(5).checked_pow(n(8)), Some(n(390_625)));
        assert_eq!(n(2).checked_pow(n(9)), Some(n(512)));
        assert_eq!(n(-2).checked_pow(n(3)), Some(n(-8)));
    }

    #[test]
    fn unit_bases_with_huge_exponents() {
        assert_eq!(n(1).checked_pow(Number::MAX), Some(n(1)));
        assert_eq!(n(-1).checked_pow(Number::MAX), Some(n(-1)));
        assert_eq!(n(-1).checked_pow(n(i64::MAX - 1)), Some(n(1)));
    }

    #[test]
    fn negative_exponent_and_overflow_are_none() {
        assert_eq!(n(2).checked_pow(n(-1)), None);
        assert_eq!(n(2).checked_pow(n(63)), None);
        assert_eq!(n(2).checked_pow(Number::MAX), None);
    }
}

#[test]
fn checked_arithmetic_overflow() {
    assert_eq!(Number::MAX.checked_add(n(1)), None);
    assert_eq!(Number::MIN.checked_sub(n(1)), None);
    assert_eq!(Number::MAX.checked_mul(n(2)), None);
    assert_eq!(Number::MIN.checked_neg(), None);
    assert_eq!(n(-3).checked_neg(), Some(n(3)));
}

proptest! {
    #[test]
    fn division_truncates(a in -1_000_000i64..1_000_000, b in -1_000i64..1_000) {
        prop_assume!(b != 0);
        let q = n(a).checked_div(n(b)).map(Number::raw);
        prop_assert_eq!(q, Some(a / b));
        // Truncation: |q * b| never exceeds |a|.
        let q = a / b;
        prop_assert!((q * b).abs() <= a.abs());
    }

    #[test]
    fn modulo_sign_follows_divisor(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let Some(m) = n(a).checked_modulo(n(b)) else {
            return Err(TestCaseError::fail("modulo with nonzero divisor must succeed"));
        };
        prop_assert!(m.is_zero() || (m.raw() < 0) == (b < 0));
        prop_assert!(m.raw().unsigned_abs() < b.unsigned_abs());
    }

    #[test]
    fn modulo_matches_euclid_identity(a in -1_000_000i64..1_000_000, b in -1_000i64..1_000) {
        prop_assume!(b != 0);
        let m = n(a).checked_modulo(n(b)).map(Number::raw);
        prop_assert_eq!(m, Some(((a % b) + b) % b));
    }

    #[test]
    fn zero_divided_is_zero(b in any::<i64>()) {
        prop_assume!(b != 0);
        prop_assert_eq!(n(0).checked_div(n(b)), Some(n(0)));
    }

    #[test]
    fn anything_to_the_zero_is_one(a in any::<i64>()) {
        prop_assert_eq!(n(a).checked_pow(n(0)), Some(n(1)));
    }

    #[test]
    fn zero_to_a_positive_power_is_zero(e in 1i64..i64::MAX) {
        prop_assert_eq!(n(0).checked_pow(n(e)), Some(n(0)));
    }
}
