//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  Discounts make it worse: a 12.5% discount on ₹199.99 is            │
//! │  ₹174.99125 - round that per line and the invoice total drifts.     │
//! │                                                                     │
//! │  OUR SOLUTION: exact decimal arithmetic                             │
//! │    Intermediates stay unrounded; rounding to two decimals happens   │
//! │    once, at the display boundary, via `Money::rounded`.             │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use apothek_core::money::Money;
//!
//! let price = Money::from_minor(1099); // ₹10.99
//!
//! let line_total = price.times(3);     // ₹32.97
//! let total = line_total + Money::from_major(5);
//! assert_eq!(total, Money::from_minor(3797));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::Percent;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the display currency.
///
/// ## Design Decisions
/// - **Decimal-backed**: exact arithmetic, no binary float drift
/// - **Single field tuple struct**: zero-cost abstraction over `Decimal`
/// - **Unrounded until display**: `amount()` is exact, `rounded()` is 2 dp
///
/// Every monetary value in the system flows through this type:
/// catalog prices, line totals, cart totals, report sums.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use apothek_core::money::Money;
    ///
    /// let price = Money::from_major(5); // ₹5.00
    /// assert_eq!(price.rounded().to_string(), "5.00");
    /// ```
    #[inline]
    pub fn from_major(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Creates a Money value from hundredths of a unit (paise/cents).
    ///
    /// ## Example
    /// ```rust
    /// use apothek_core::money::Money;
    ///
    /// let price = Money::from_minor(1099); // ₹10.99
    /// assert_eq!(price.rounded().to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_minor(minor: i64) -> Self {
        Money(Decimal::new(minor, 2))
    }

    /// Returns the exact, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount rounded to two decimal places for display.
    ///
    /// Uses banker's rounding (round half to even), the `rust_decimal`
    /// default. Intermediate computations never go through this.
    pub fn rounded(&self) -> Decimal {
        let mut display = self.0.round_dp(2);
        display.rescale(2);
        display
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies the amount by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use apothek_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(299); // ₹2.99
    /// assert_eq!(unit_price.times(3), Money::from_minor(897));
    /// ```
    #[inline]
    pub fn times(&self, quantity: i64) -> Self {
        Money(self.0 * Decimal::from(quantity))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The discount is applied uniformly: `amount × (1 − percent/100)`.
    /// Out-of-range percents are applied as given; see [`Percent`].
    ///
    /// ## Example
    /// ```rust
    /// use apothek_core::money::Money;
    /// use apothek_core::types::Percent;
    /// use rust_decimal::Decimal;
    ///
    /// let subtotal = Money::from_major(200);
    /// let total = subtotal.discounted_by(Percent::new(Decimal::from(10)));
    /// assert_eq!(total, Money::from_major(180));
    /// ```
    pub fn discounted_by(&self, discount: Percent) -> Self {
        Money(self.0 * discount.retained_factor())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for logs and debugging. The UI formats amounts itself from
/// the serialized decimal value.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.rounded())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity (for line total calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.times(qty)
    }
}

/// Summation over line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_constructors() {
        assert_eq!(Money::from_major(10).amount(), dec!(10));
        assert_eq!(Money::from_minor(1099).amount(), dec!(10.99));
        assert_eq!(Money::new(dec!(3.5)).amount(), dec!(3.5));
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(1099)), "₹10.99");
        assert_eq!(format!("{}", Money::from_major(5)), "₹5.00");
        assert_eq!(format!("{}", Money::from_minor(-550)), "₹-5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_minor(550);

        assert_eq!(a + b, Money::from_minor(1550));
        assert_eq!(a - b, Money::from_minor(450));
        assert_eq!(a * 3, Money::from_major(30));

        let mut acc = Money::zero();
        acc += a;
        acc -= b;
        assert_eq!(acc, Money::from_minor(450));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_major(5), Money::from_minor(250), Money::zero()]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_minor(750));
    }

    #[test]
    fn test_times() {
        assert_eq!(Money::from_minor(299).times(3), Money::from_minor(897));
        assert_eq!(Money::from_major(5).times(0), Money::zero());
    }

    #[test]
    fn test_discounted_by() {
        let subtotal = Money::from_major(100);
        assert_eq!(
            subtotal.discounted_by(Percent::new(dec!(10))),
            Money::from_major(90)
        );
        assert_eq!(
            subtotal.discounted_by(Percent::zero()),
            Money::from_major(100)
        );
    }

    #[test]
    fn test_fractional_discount_stays_unrounded() {
        // 12.5% off ₹199.99 = ₹174.99125; the exact value is retained
        let total = Money::from_minor(19999).discounted_by(Percent::new(dec!(12.5)));
        assert_eq!(total.amount(), dec!(174.99125));
        assert_eq!(total.rounded(), dec!(174.99));
    }

    #[test]
    fn test_rounded_uses_bankers_rounding() {
        // Documented behavior: midpoints round half to even
        assert_eq!(Money::new(dec!(0.125)).rounded(), dec!(0.12));
        assert_eq!(Money::new(dec!(0.135)).rounded(), dec!(0.14));
    }

    #[test]
    fn test_is_negative() {
        assert!(Money::from_minor(-1).is_negative());
        assert!(!Money::zero().is_negative());
        assert!(!Money::from_minor(1).is_negative());
    }
}
