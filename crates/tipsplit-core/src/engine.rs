//! # Calculation Engine
//!
//! The bill-splitting calculation: tip amount and total per person.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Calculation Flow                                  │
//! │                                                                         │
//! │  Bill: 100.00      Tip: 18%        Split: 4                            │
//! │       │                 │               │                               │
//! │       └────────┬────────┘               │                               │
//! │                ▼                        │                               │
//! │        calculate_tip ──► 18.00          │                               │
//! │                │                        │                               │
//! │       bill + tip = 118.00               │                               │
//! │                └───────────┬────────────┘                               │
//! │                            ▼                                            │
//! │              calculate_total_per_person ──► 29.50 each                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both operations are pure and total: the screen layer re-invokes them on
//! every input change (text edit, +/- tap, slider drag) and renders the
//! result. Nothing here holds state, so there is nothing to invalidate.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{SplitCount, TipPercent};
use crate::MIN_TIPPABLE_CENTS;

// =============================================================================
// Engine Operations
// =============================================================================

/// Calculates the tip for a bill.
///
/// ## Contract
/// Returns `bill × percent / 100` (rounded half-up to the cent) when the
/// bill exceeds 1.00; returns zero otherwise. The guard keeps degenerate
/// near-zero bills from producing meaningless tips.
///
/// ## Example
/// ```rust
/// use tipsplit_core::{calculate_tip, Money, TipPercent};
///
/// let tip = calculate_tip(Money::from_cents(10_000), TipPercent::clamped(18));
/// assert_eq!(tip.cents(), 1_800); // 18.00
///
/// // Sub-1.00 bills never tip
/// let none = calculate_tip(Money::from_cents(50), TipPercent::clamped(50));
/// assert!(none.is_zero());
/// ```
pub fn calculate_tip(bill: Money, percent: TipPercent) -> Money {
    if bill.cents() > MIN_TIPPABLE_CENTS {
        bill.percent_of(percent)
    } else {
        Money::zero()
    }
}

/// Calculates what each person pays: `(bill + tip) / split`.
///
/// ## Division Policy
/// Shares are truncated to whole cents. The cents that do not divide evenly
/// are NOT folded into anyone's share; [`split_bill`] reports them as an
/// explicit remainder. With the screen's two-digit display, truncation and
/// the remainder line are the honest rendering of an uneven split.
///
/// ## Example
/// ```rust
/// use tipsplit_core::{calculate_total_per_person, Money, SplitCount, TipPercent};
///
/// let share = calculate_total_per_person(
///     Money::from_cents(10_000), // 100.00
///     SplitCount::clamped(4),
///     TipPercent::clamped(18),
/// );
/// assert_eq!(share.cents(), 2_950); // 29.50 each
/// ```
pub fn calculate_total_per_person(bill: Money, split: SplitCount, percent: TipPercent) -> Money {
    let grand_total = bill + calculate_tip(bill, percent);
    let (share, _) = grand_total.split_evenly(split.get());
    share
}

// =============================================================================
// Bill Split Breakdown
// =============================================================================

/// The full breakdown for one screen render.
///
/// ## Why a Struct?
/// The screen shows the tip amount, the per-person total and (when the split
/// is uneven) the leftover cents all at once. Computing them together keeps
/// the displayed values consistent: they all derive from the same inputs in
/// a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillSplit {
    /// The bill amount the user entered.
    pub bill: Money,

    /// Tip percentage taken from the slider.
    pub tip_percent: TipPercent,

    /// How many people share the bill.
    pub split_by: SplitCount,

    /// Tip on the bill (zero when the bill is at or below 1.00).
    pub tip_amount: Money,

    /// Bill plus tip.
    pub grand_total: Money,

    /// What each person pays (whole cents, truncated).
    pub per_person: Money,

    /// Cents of the grand total that did not divide evenly.
    /// Always less than `split_by` cents; zero for an even split.
    pub remainder: Money,
}

/// Computes the full breakdown for the current inputs.
///
/// ## Example
/// ```rust
/// use tipsplit_core::{split_bill, Money, SplitCount, TipPercent};
///
/// let split = split_bill(
///     Money::from_cents(10_000),
///     SplitCount::clamped(3),
///     TipPercent::clamped(18),
/// );
/// assert_eq!(split.tip_amount.cents(), 1_800);
/// assert_eq!(split.grand_total.cents(), 11_800);
/// assert_eq!(split.per_person.cents(), 3_933);  // 39.33 each
/// assert_eq!(split.remainder.cents(), 1);       // one cent left over
/// ```
pub fn split_bill(bill: Money, split: SplitCount, percent: TipPercent) -> BillSplit {
    let tip_amount = calculate_tip(bill, percent);
    let grand_total = bill + tip_amount;
    let (per_person, remainder) = grand_total.split_evenly(split.get());

    BillSplit {
        bill,
        tip_percent: percent,
        split_by: split,
        tip_amount,
        grand_total,
        per_person,
        remainder,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
