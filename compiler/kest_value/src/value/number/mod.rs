//! Integer newtype that prevents unchecked arithmetic.
//!
//! `Number` wraps `i64` and intentionally does NOT implement `Add`, `Sub`,
//! `Mul`, `Div`, `Rem`, or `Neg`. Every operation goes through a checked
//! method returning `Option<Number>`, so overflow cannot slip through as a
//! wrapped value.
//!
//! Division truncates toward zero. Modulo takes the sign of the divisor.
//! Integers have no negative zero, so results never need normalizing.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Number(i64);

impl Number {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[inline]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.0.checked_mul(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked negation. Returns `None` for `MIN`.
    #[inline]
    pub const fn checked_neg(self) -> Option<Self> {
        match self.0.checked_neg() {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Truncating division (rounds toward zero).
    ///
    /// Returns `None` on division by zero or overflow (`MIN / -1`).
    #[inline]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        match self.0.checked_div(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Modulo whose result has the divisor's sign (or is zero).
    ///
    /// - `8.checked_modulo(-5)` = `Some(-2)`
    /// - `(-8).checked_modulo(5)` = `Some(2)`
    ///
    /// Returns `None` only for a zero divisor. `MIN % -1` is `0`.
    pub fn checked_modulo(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        if rhs.0 == -1 {
            return Some(Self::ZERO);
        }
        let rem = self.0.checked_rem(rhs.0)?;
        if rem != 0 && (rem < 0) != (rhs.0 < 0) {
            // Opposite signs: the sum cannot overflow.
            rem.checked_add(rhs.0).map(Self)
        } else {
            Some(Self(rem))
        }
    }

    /// Integer exponentiation.
    ///
    /// `x ** 0 == 1` for every `x`, including zero. Returns `None` for a
    /// negative exponent or when the result does not fit.
    pub fn checked_pow(self, exp: Self) -> Option<Self> {
        if exp.0 < 0 {
            return None;
        }
        match self.0 {
            0 if exp.0 == 0 => Some(Self::ONE),
            0 => Some(Self::ZERO),
            1 => Some(Self::ONE),
            -1 if exp.0 & 1 == 0 => Some(Self::ONE),
            -1 => Some(Self(-1)),
            base => {
                let exp = u32::try_from(exp.0).ok()?;
                base.checked_pow(exp).map(Self)
            }
        }
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Number> for i64 {
    #[inline]
    fn from(value: Number) -> Self {
        value.0
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests;
