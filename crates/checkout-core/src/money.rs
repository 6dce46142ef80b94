//! # Money Module
//!
//! Provides the `Money` type for rounded monetary amounts.
//!
//! ## Why One Rounding Boundary?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE INTERMEDIATE ROUNDING PROBLEM                                      │
//! │                                                                         │
//! │  Tier and coupon discounts are fractions (0.1 = 10%), so in-flight      │
//! │  amounts are not integers:                                              │
//! │    1099 × 3 × (1 − 0.1) = 2967.3                                        │
//! │                                                                         │
//! │  Round per line AND per summary field and the books stop matching:      │
//! │    round(2967.3) + round(494.55) = 2967 + 495 = 3462                    │
//! │    round(2967.3  +       494.55) = round(3461.85) = 3462? Sometimes.    │
//! │                                                                         │
//! │  OUR SOLUTION: full f64 precision everywhere, rounded HALF-UP exactly   │
//! │  once, when a summary field crosses into `Money` at the output          │
//! │  boundary. Every displayed figure is the rounding of an exact sum.      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! // At the output boundary (preferred)
//! let total = Money::from_rounded(8999.5); // rounds half-up to 9000
//!
//! // From an amount already in whole units
//! let flat = Money::from_units(2000);
//!
//! assert_eq!(total.units(), 9000);
//! assert_eq!((total - flat).units(), 7000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A rounded monetary amount in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: a malformed coupon can push a summary field negative,
///   and that case is not guarded, so the type must represent it
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: serializes as a bare number for the frontend
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price (f64) ──► line_total (f64) ──► cart sums (f64)          │
/// │                                                    │                    │
/// │                                          Money::from_rounded            │
/// │                                                    │                    │
/// │                                                    ▼                    │
/// │  CartTotals { total_before_discount, total_after_discount,             │
/// │               total_discount }            ← all Money                   │
/// │                                                                         │
/// │  EVERY figure shown to a customer flows through this type              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from an amount already in whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_units(1000);
    /// assert_eq!(price.units(), 1000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Rounds an exact `f64` amount half-up to the nearest whole unit.
    ///
    /// This is THE rounding boundary of the crate. In-flight arithmetic
    /// stays in `f64`; only summary fields cross here.
    ///
    /// ## Half-Up, Not Half-Away-From-Zero
    /// Half-up sends `x.5` toward +∞: `0.5 → 1`, but `-0.5 → 0`.
    /// `f64::round()` would give `-0.5 → -1`. The difference only shows on
    /// negative amounts, which only arise from malformed coupon input, but
    /// the boundary applies the same half-up rule either way.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_rounded(8999.4).units(), 8999);
    /// assert_eq!(Money::from_rounded(8999.5).units(), 9000);
    /// assert_eq!(Money::from_rounded(-0.5).units(), 0);
    /// ```
    #[inline]
    pub fn from_rounded(amount: f64) -> Self {
        Money((amount + 0.5).floor() as i64)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.units(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Use frontend formatting for actual UI
/// display to handle currency symbols and localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
