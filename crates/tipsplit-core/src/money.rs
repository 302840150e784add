//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many bill-splitting apps:                                           │
//! │    100.00 / 3 = 33.33 (×3 = 99.99)  → Lost 0.01!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10000 cents / 3 = 3333 cents (×3 = 9999 cents)                      │
//! │    We KNOW we lost 1 cent, and report it explicitly                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::money::Money;
//!
//! // Create from cents (preferred)
//! let bill = Money::from_cents(13_400); // 134.00
//!
//! // Or parse what the user typed into the bill field
//! let typed: Money = "134.00".parse().unwrap();
//! assert_eq!(bill, typed);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(134.0); // NO SUCH METHOD EXISTS!
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::TipPercent;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic stays closed under subtraction
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
/// - **No currency**: The app handles a single currency; the symbol shown
///   next to an amount is the screen layer's concern
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Bill field text ──► parse ──► Money (bill amount)                     │
/// │                                   │                                     │
/// │                                   ├──► tip amount (Money)              │
/// │                                   │                                     │
/// │                                   └──► total per person (Money)        │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    ///
    /// let bill = Money::from_cents(13_400); // Represents 134.00
    /// assert_eq!(bill.cents(), 13_400);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    ///
    /// let bill = Money::from_major_minor(134, 50); // 134.50
    /// assert_eq!(bill.cents(), 13_450);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (the part before the decimal point).
    #[inline]
    pub const fn major_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
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

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Takes a percentage of this amount, rounding half-up to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math throughout: `(amount * percent + 50) / 100`
    /// The +50 provides the rounding (50/100 = 0.5). Intermediate math is
    /// widened to i128 so large amounts cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    /// use tipsplit_core::types::TipPercent;
    ///
    /// let bill = Money::from_cents(10_000); // 100.00
    /// let pct = TipPercent::clamped(18);    // 18%
    ///
    /// let tip = bill.percent_of(pct);
    /// assert_eq!(tip.cents(), 1_800); // 18.00
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Bill: 100.00
    ///      │
    ///      ▼
    /// percent_of(18%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tip: 18.00
    /// ```
    pub fn percent_of(&self, percent: TipPercent) -> Money {
        let cents = (self.0 as i128 * percent.get() as i128 + 50) / 100;
        Money::from_cents(cents as i64)
    }

    /// Splits this amount evenly between `parts` people.
    ///
    /// Returns `(share, remainder)`: the per-person share (truncated to whole
    /// cents) and the cents that did not divide evenly.
    ///
    /// ## Why Return the Remainder?
    /// ```text
    /// 100.00 split 3 ways:
    ///   share     = 33.33
    ///   remainder =  0.01   (33.33 × 3 = 99.99, one cent left on the table)
    /// ```
    /// Truncating silently would make `share × parts` disagree with the bill.
    /// Whoever pays the remainder is a table negotiation, not our problem,
    /// but we must report it.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    ///
    /// let total = Money::from_cents(10_000); // 100.00
    /// let (share, remainder) = total.split_evenly(3);
    /// assert_eq!(share.cents(), 3_333);
    /// assert_eq!(remainder.cents(), 1);
    /// ```
    #[inline]
    pub const fn split_evenly(&self, parts: u32) -> (Money, Money) {
        let parts = parts as i64;
        (Money(self.0 / parts), Money(self.0 % parts))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses user-typed bill text into Money.
///
/// ## Accepted Grammar
/// - optional major digits, optional '.', at most two fraction digits
/// - `"12"` → 12.00, `"12.3"` → 12.30, `"12.34"` → 12.34, `".5"` → 0.50
///
/// ## Rejected
/// - empty or whitespace-only text (`Required`)
/// - a sign or any non-digit character (`InvalidFormat` / `MustBePositive`)
/// - more than two fraction digits (`TooPrecise`) - the screen displays two
///   fraction digits, so accepting finer input would silently lose precision
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();

        if text.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        if text.starts_with('-') {
            return Err(ValidationError::MustBePositive {
                field: "amount".to_string(),
            });
        }

        let (major_text, minor_text) = match text.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (text, ""),
        };

        // "." alone carries no digits at all
        if major_text.is_empty() && minor_text.is_empty() {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: "must contain at least one digit".to_string(),
            });
        }

        let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !digits_only(major_text) || !digits_only(minor_text) {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: "must contain only digits and an optional decimal point".to_string(),
            });
        }

        if minor_text.len() > 2 {
            return Err(ValidationError::TooPrecise {
                field: "amount".to_string(),
                max_decimals: 2,
            });
        }

        let major: i64 = if major_text.is_empty() {
            0
        } else {
            major_text
                .parse()
                .map_err(|_| ValidationError::InvalidFormat {
                    field: "amount".to_string(),
                    reason: "amount too large".to_string(),
                })?
        };

        // Pad "3" to 30 cents, "34" stays 34
        let minor: i64 = match minor_text.len() {
            0 => 0,
            1 => minor_text.parse::<i64>().unwrap_or(0) * 10,
            _ => minor_text.parse::<i64>().unwrap_or(0),
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: "amount too large".to_string(),
            })?;

        Ok(Money::from_cents(cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the amount with two fraction digits.
///
/// ## Note
/// No currency symbol: the screen layer prefixes one when rendering
/// (the app shows a single currency, so the symbol never varies).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.major_units().abs(),
            self.cents_part()
        )
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

/// Multiplication by integer (used to reconstruct a split bill).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(13_450);
        assert_eq!(money.cents(), 13_450);
        assert_eq!(money.major_units(), 134);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(134, 50);
        assert_eq!(money.cents(), 13_450);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(13_400)), "134.00");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(7)), "0.07");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1_000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1_500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3_000);
    }

    #[test]
    fn test_percent_of_basic() {
        // 100.00 at 18% = 18.00
        let bill = Money::from_cents(10_000);
        let tip = bill.percent_of(TipPercent::clamped(18));
        assert_eq!(tip.cents(), 1_800);
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        // 10.01 at 3% = 0.3003 → 0.30
        let a = Money::from_cents(1_001);
        assert_eq!(a.percent_of(TipPercent::clamped(3)).cents(), 30);

        // 12.50 at 2% = 0.25 exactly
        let b = Money::from_cents(1_250);
        assert_eq!(b.percent_of(TipPercent::clamped(2)).cents(), 25);

        // 0.50 at 50% = 0.25
        let c = Money::from_cents(50);
        assert_eq!(c.percent_of(TipPercent::clamped(50)).cents(), 25);

        // 0.99 at 50% = 0.495 → rounds up to 0.50
        let d = Money::from_cents(99);
        assert_eq!(d.percent_of(TipPercent::clamped(50)).cents(), 50);
    }

    #[test]
    fn test_split_evenly_exact() {
        let total = Money::from_cents(11_800);
        let (share, remainder) = total.split_evenly(4);
        assert_eq!(share.cents(), 2_950);
        assert!(remainder.is_zero());
    }

    /// Critical test: Verify that 100.00 / 3 × 3 behaves as expected
    /// This documents the intentional precision loss
    #[test]
    fn test_split_evenly_remainder_reconstructs_total() {
        let total = Money::from_cents(10_000);
        let (share, remainder) = total.split_evenly(3);

        assert_eq!(share.cents(), 3_333);
        assert_eq!(remainder.cents(), 1);

        // share × parts + remainder is the whole bill, nothing vanishes
        assert_eq!(share * 3 + remainder, total);
    }

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!("134".parse::<Money>().unwrap().cents(), 13_400);
        assert_eq!("134.5".parse::<Money>().unwrap().cents(), 13_450);
        assert_eq!("134.56".parse::<Money>().unwrap().cents(), 13_456);
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("0".parse::<Money>().unwrap().cents(), 0);
        assert_eq!("  12.00  ".parse::<Money>().unwrap().cents(), 1_200);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "".parse::<Money>(),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            "   ".parse::<Money>(),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            "-5".parse::<Money>(),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            "12.345".parse::<Money>(),
            Err(ValidationError::TooPrecise { .. })
        ));
        assert!(matches!(
            "abc".parse::<Money>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "12,50".parse::<Money>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            ".".parse::<Money>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "1.2.3".parse::<Money>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }
}
