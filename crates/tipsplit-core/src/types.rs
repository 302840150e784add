//! # Domain Types
//!
//! Core domain newtypes used throughout Tipsplit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   TipPercent    │   │   SplitCount    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  u32 in [0,100] │   │  u32 in [1,100] │                             │
//! │  │  from slider    │   │  from +/- taps  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Both clamp at construction. Once a value exists, it is in range:      │
//! │  the engine never needs to re-validate, and a zero split count        │
//! │  (division by zero) cannot be represented at all.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{MAX_SPLIT, MAX_TIP_PERCENT, MIN_SPLIT};

// =============================================================================
// Tip Percent
// =============================================================================

/// Tip percentage as a whole number in [0, 100].
///
/// ## Why a Whole Number?
/// The slider hands the screen a continuous position, but the tip the user
/// sees (and the tip we charge) is a whole percentage. Converting once, here,
/// keeps float rounding out of the money math entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipPercent(u32);

impl TipPercent {
    /// Creates a tip percentage, clamping into [0, 100].
    #[inline]
    pub const fn clamped(pct: u32) -> Self {
        if pct > MAX_TIP_PERCENT {
            TipPercent(MAX_TIP_PERCENT)
        } else {
            TipPercent(pct)
        }
    }

    /// Converts a continuous slider position in [0.0, 1.0] to a percentage.
    ///
    /// ## Contract
    /// `percentage = round(position * 100)`, monotonic in the position.
    /// Positions outside [0.0, 1.0] (or NaN) are clamped first, so the
    /// result is always in range regardless of what the widget reports.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::types::TipPercent;
    ///
    /// assert_eq!(TipPercent::from_slider_position(0.18).get(), 18);
    /// assert_eq!(TipPercent::from_slider_position(0.185).get(), 19);
    /// assert_eq!(TipPercent::from_slider_position(1.0).get(), 100);
    /// ```
    pub fn from_slider_position(position: f64) -> Self {
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        TipPercent((position * 100.0).round() as u32)
    }

    /// Returns the percentage as a whole number.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Zero tip.
    #[inline]
    pub const fn zero() -> Self {
        TipPercent(0)
    }

    /// Checks if the tip is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TipPercent {
    fn default() -> Self {
        TipPercent::zero()
    }
}

// =============================================================================
// Split Count
// =============================================================================

/// Number of people sharing the bill, always in [1, 100].
///
/// ## User Workflow
/// ```text
/// Tap [-] ──► decrement() ──► stops at 1
/// Tap [+] ──► increment() ──► stops at 100
/// ```
/// The screen's +/- buttons map directly onto the two methods; both saturate
/// at the bounds, so the buttons can be mashed without any range check in
/// the screen layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SplitCount(u32);

impl SplitCount {
    /// Creates a split count, clamping into [1, 100].
    ///
    /// Raw input of 0 or below clamps up to 1: a bill always has at least
    /// the payer, and this is what makes the per-person division total.
    #[inline]
    pub const fn clamped(raw: i64) -> Self {
        if raw < MIN_SPLIT as i64 {
            SplitCount(MIN_SPLIT)
        } else if raw > MAX_SPLIT as i64 {
            SplitCount(MAX_SPLIT)
        } else {
            SplitCount(raw as u32)
        }
    }

    /// Returns the count of people.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// One more person, saturating at the maximum.
    #[inline]
    pub const fn increment(&self) -> Self {
        if self.0 >= MAX_SPLIT {
            SplitCount(MAX_SPLIT)
        } else {
            SplitCount(self.0 + 1)
        }
    }

    /// One fewer person, saturating at the minimum.
    #[inline]
    pub const fn decrement(&self) -> Self {
        if self.0 <= MIN_SPLIT {
            SplitCount(MIN_SPLIT)
        } else {
            SplitCount(self.0 - 1)
        }
    }

    /// Whether the + button should be disabled.
    #[inline]
    pub const fn at_max(&self) -> bool {
        self.0 == MAX_SPLIT
    }

    /// Whether the - button should be disabled.
    #[inline]
    pub const fn at_min(&self) -> bool {
        self.0 == MIN_SPLIT
    }
}

/// Default split is a single payer.
impl Default for SplitCount {
    fn default() -> Self {
        SplitCount(MIN_SPLIT)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_percent_clamps() {
        assert_eq!(TipPercent::clamped(18).get(), 18);
        assert_eq!(TipPercent::clamped(0).get(), 0);
        assert_eq!(TipPercent::clamped(100).get(), 100);
        assert_eq!(TipPercent::clamped(250).get(), 100);
    }

    #[test]
    fn test_tip_percent_from_slider_position() {
        assert_eq!(TipPercent::from_slider_position(0.0).get(), 0);
        assert_eq!(TipPercent::from_slider_position(0.18).get(), 18);
        assert_eq!(TipPercent::from_slider_position(0.5).get(), 50);
        assert_eq!(TipPercent::from_slider_position(1.0).get(), 100);

        // Half-way between steps rounds to nearest whole percent
        assert_eq!(TipPercent::from_slider_position(0.185).get(), 19);
        assert_eq!(TipPercent::from_slider_position(0.184).get(), 18);
    }

    #[test]
    fn test_tip_percent_slider_out_of_range() {
        assert_eq!(TipPercent::from_slider_position(-0.5).get(), 0);
        assert_eq!(TipPercent::from_slider_position(1.5).get(), 100);
        assert_eq!(TipPercent::from_slider_position(f64::NAN).get(), 0);
    }

    #[test]
    fn test_tip_percent_monotonic_in_position() {
        let mut last = 0;
        for step in 0..=50 {
            // 50 discrete slider steps, 2% apart
            let pct = TipPercent::from_slider_position(step as f64 / 50.0).get();
            assert!(pct >= last);
            last = pct;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_split_count_clamps() {
        assert_eq!(SplitCount::clamped(4).get(), 4);
        assert_eq!(SplitCount::clamped(0).get(), 1);
        assert_eq!(SplitCount::clamped(-7).get(), 1);
        assert_eq!(SplitCount::clamped(100).get(), 100);
        assert_eq!(SplitCount::clamped(1_000).get(), 100);
    }

    #[test]
    fn test_split_count_saturating_steps() {
        let one = SplitCount::default();
        assert_eq!(one.get(), 1);
        assert!(one.at_min());
        assert_eq!(one.decrement(), one);

        let two = one.increment();
        assert_eq!(two.get(), 2);
        assert_eq!(two.decrement(), one);

        let max = SplitCount::clamped(100);
        assert!(max.at_max());
        assert_eq!(max.increment(), max);
    }
}
