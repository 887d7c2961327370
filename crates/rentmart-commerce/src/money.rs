//! Whole-rupee money arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// An INR amount in whole rupees.
///
/// Every amount the platform stores or displays is a whole rupee.
/// Fractional values only exist inside pricing math and must be rounded
/// into a `Money` at the documented boundaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from whole rupees.
    pub const fn new(rupees: i64) -> Self {
        Self(rupees)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Round a fractional rupee value to the nearest whole rupee.
    pub fn rounded(rupees: f64) -> Self {
        Self(rupees.round() as i64)
    }

    /// The amount in whole rupees.
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// The amount as a float, for intermediate pricing math.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// `percent` (0-100) of this amount, rounded to the nearest rupee.
    pub fn percentage(&self, percent: f64) -> Money {
        Self::rounded(self.0 as f64 * (percent / 100.0))
    }

    /// A fraction (e.g. a 0.18 tax rate) of this amount, rounded to the
    /// nearest rupee.
    pub fn fraction(&self, rate: f64) -> Money {
        Self::rounded(self.0 as f64 * rate)
    }

    /// Checked addition; `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked multiplication by a whole-number factor; `None` on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.0.checked_mul(factor).map(Self)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money(self.0 * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-₹{}", -self.0)
        } else {
            write!(f, "₹{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(599);
        assert_eq!(m.rupees(), 599);
        assert!(m.is_positive());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Money::rounded(91.44), Money::new(91));
        assert_eq!(Money::rounded(304.8), Money::new(305));
        assert_eq!(Money::rounded(152.4), Money::new(152));
        assert_eq!(Money::rounded(508.09), Money::new(508));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(Money::new(3048).percentage(10.0), Money::new(305));
        assert_eq!(Money::new(599).percentage(0.0), Money::zero());
    }

    #[test]
    fn test_fraction() {
        assert_eq!(Money::new(508).fraction(0.18), Money::new(91));
        assert_eq!(Money::new(607).fraction(0.18), Money::new(109));
        assert_eq!(Money::new(508).fraction(0.30), Money::new(152));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(2000);
        let b = Money::new(299);
        assert_eq!(a + b, Money::new(2299));
        assert_eq!(a - b, Money::new(1701));
        assert_eq!(b * 3, Money::new(897));

        let mut c = Money::new(100);
        c += Money::new(50);
        assert_eq!(c, Money::new(150));
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(
            Money::new(508).checked_mul(6),
            Some(Money::new(3048))
        );
        assert_eq!(Money::new(i64::MAX).checked_add(Money::new(1)), None);
        assert_eq!(Money::new(i64::MAX).checked_mul(2), None);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::new(2000), Money::new(299), Money::new(199)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::new(2498));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(599).to_string(), "₹599");
        assert_eq!(Money::zero().to_string(), "₹0");
        assert_eq!(Money::new(-45).to_string(), "-₹45");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::new(599)).unwrap();
        assert_eq!(json, "599");
        let back: Money = serde_json::from_str("599").unwrap();
        assert_eq!(back, Money::new(599));
    }
}
