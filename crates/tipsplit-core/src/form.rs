//! # Bill Form State
//!
//! The explicit "derive-on-event" state behind the single screen.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Form Operations                                 │
//! │                                                                         │
//! │  Screen Action            Form Event              State Change          │
//! │  ─────────────            ──────────              ────────────          │
//! │                                                                         │
//! │  Type in bill field ─────► set_bill_text() ─────► bill_text = s        │
//! │                                                                         │
//! │  Tap [+] ────────────────► increment_split() ───► split_by += 1 (≤100) │
//! │                                                                         │
//! │  Tap [-] ────────────────► decrement_split() ───► split_by -= 1 (≥1)   │
//! │                                                                         │
//! │  Drag slider ────────────► set_slider_position() ► position = p        │
//! │                                                                         │
//! │  Render ─────────────────► totals() ────────────► (derived, no change) │
//! │                                                                         │
//! │  NOTE: every derived value is recomputed in full on every read.        │
//! │        Recomputation is O(1) arithmetic, so nothing is cached.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Threading
//! No `Arc`, no `Mutex`: the screen layer owns this value and serializes
//! input events onto it. The model is single-threaded and synchronous; a
//! host that wants shared access can wrap it itself.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::engine::{split_bill, BillSplit};
use crate::money::Money;
use crate::types::{SplitCount, TipPercent};
use crate::validation::validate_bill_text;

// =============================================================================
// Bill Form
// =============================================================================

/// Everything the user can edit on the screen, and nothing derived.
///
/// ## Invariants
/// - `split_by` is always in [1, 100] (the type guarantees it)
/// - `slider_position` is always in [0.0, 1.0] (the setter clamps)
/// - `bill_text` is stored verbatim, including invalid text: the user must
///   see exactly what they typed while they fix it
///
/// Derived values (tip percent, tip amount, per-person total) are
/// deliberately NOT fields. Storing them would create two sources of truth;
/// they are recomputed from the three inputs on every read.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillForm {
    /// Raw contents of the bill text field.
    pub bill_text: String,

    /// How many people share the bill.
    pub split_by: SplitCount,

    /// Tip slider position in [0.0, 1.0].
    pub slider_position: f64,
}

impl BillForm {
    /// A fresh form: empty bill field, single payer, slider at zero.
    pub fn new() -> Self {
        BillForm {
            bill_text: String::new(),
            split_by: SplitCount::default(),
            slider_position: 0.0,
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Replaces the bill field contents.
    ///
    /// Invalid text is kept as-is; validity is a derived question
    /// (see [`BillForm::is_valid`]), not a gate on typing.
    pub fn set_bill_text(&mut self, text: impl Into<String>) {
        self.bill_text = text.into();
    }

    /// One more person, saturating at 100.
    pub fn increment_split(&mut self) {
        self.split_by = self.split_by.increment();
    }

    /// One fewer person, saturating at 1.
    pub fn decrement_split(&mut self) {
        self.split_by = self.split_by.decrement();
    }

    /// Moves the tip slider, clamping into [0.0, 1.0].
    ///
    /// NaN from a misbehaving widget resets the slider to zero rather than
    /// poisoning every later derivation.
    pub fn set_slider_position(&mut self, position: f64) {
        self.slider_position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// The parsed bill amount, or `None` while the text is empty/invalid.
    pub fn bill_amount(&self) -> Option<Money> {
        validate_bill_text(&self.bill_text).ok()
    }

    /// Whether the bill text currently parses.
    ///
    /// The screen shows the split and tip controls only while this holds;
    /// hiding them is the single user-visible "error" state.
    pub fn is_valid(&self) -> bool {
        self.bill_amount().is_some()
    }

    /// Tip percentage derived from the slider position.
    pub fn tip_percent(&self) -> TipPercent {
        TipPercent::from_slider_position(self.slider_position)
    }

    /// The full breakdown for the current inputs, or `None` while the bill
    /// text is invalid (the engine is never invoked on unparseable input).
    pub fn totals(&self) -> Option<BillSplit> {
        let bill = self.bill_amount()?;
        Some(split_bill(bill, self.split_by, self.tip_percent()))
    }
}

impl Default for BillForm {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
