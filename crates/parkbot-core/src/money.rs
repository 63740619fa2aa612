//! # Money
//!
//! The `Money` type used for all tariff amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                        │
//! │                                                                    │
//! │  In floating point:                                                │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                              │
//! │                                                                    │
//! │  OUR SOLUTION: integer kopecks                                     │
//! │    150₽ is Money(15000). Sums, differences and integer             │
//! │    multiples stay exact. The span price is the single place a      │
//! │    float appears (rate × hours) and it is rounded to whole         │
//! │    rubles before it ever becomes a Money.                          │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parkbot_core::money::Money;
//!
//! let rate = Money::from_rubles(150);
//! let two_hours = rate * 2;
//! assert_eq!(two_hours, Money::from_rubles(300));
//! assert_eq!(two_hours.to_string(), "300₽");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in kopecks (the smallest ruble unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: refunds and corrections need negative amounts
/// - **Single-field tuple struct**: zero-cost wrapper over the count
/// - **Kopecks, not rubles**: arithmetic never rounds
///
/// Serializes as the raw kopeck count, so `Money(15000)` travels as
/// `15000` and the reader needs no custom decoding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kopecks.
    #[inline]
    pub const fn from_kopecks(kopecks: i64) -> Self {
        Money(kopecks)
    }

    /// Creates a Money value from whole rubles.
    ///
    /// Tariffs are quoted in whole rubles, so this is the constructor
    /// the pricing code uses.
    #[inline]
    pub const fn from_rubles(rubles: i64) -> Self {
        Money(rubles * 100)
    }

    /// The raw amount in kopecks.
    #[inline]
    pub const fn kopecks(&self) -> i64 {
        self.0
    }

    /// The whole-ruble part of the amount (truncated toward zero).
    #[inline]
    pub const fn rubles(&self) -> i64 {
        self.0 / 100
    }

    /// The kopeck remainder, always in `0..=99`.
    #[inline]
    pub const fn kopecks_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }
}

// =============================================================================
// Display
// =============================================================================

/// Renders the amount the way the bot prints prices: `300₽`, `226.50₽`.
///
/// Whole-ruble amounts drop the kopeck part entirely because every
/// message the reservation flow sends quotes whole rubles.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        if self.kopecks_part() == 0 {
            write!(f, "{}{}₽", sign, self.rubles().abs())
        } else {
            write!(f, "{}{}.{:02}₽", sign, self.rubles().abs(), self.kopecks_part())
        }
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

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

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

/// Whole multiples only. Fractional scaling goes through the pricing
/// module, which owns the rounding rule.
impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, rhs: i64) -> Money {
        Money(self.0 * rhs)
    }
}
