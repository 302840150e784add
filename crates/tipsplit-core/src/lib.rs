//! # tipsplit-core: Pure Calculation Logic for Tipsplit
//!
//! This crate is the **heart** of Tipsplit. It contains the bill-splitting
//! calculation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tipsplit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (screen layer)                      │   │
//! │  │    Bill field ──► Split +/- ──► Tip slider ──► Totals header   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ events, current input values           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tipsplit-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   types   │  │  engine   │  │   form    │  │   │
//! │  │   │   Money   │  │ TipPercent│  │ tip math  │  │ BillForm  │  │   │
//! │  │   │  parsing  │  │ SplitCount│  │ BillSplit │  │ derive    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO WIDGETS • NO STATE OF ITS OWN • PURE FUNCTIONS   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain newtypes (TipPercent, SplitCount)
//! - [`engine`] - The tip and per-person calculations
//! - [`error`] - Validation error types
//! - [`validation`] - Input boundary validation
//! - [`form`] - Derive-on-event form state for the screen layer
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: The screen layer owns all mutable state and re-invokes the
//!    engine on every change; recomputation is O(1) so nothing is cached
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tipsplit_core::{calculate_tip, calculate_total_per_person};
//! use tipsplit_core::{Money, SplitCount, TipPercent};
//!
//! // Create money from cents (never from floats!)
//! let bill = Money::from_cents(10_000); // 100.00
//!
//! let tip = calculate_tip(bill, TipPercent::clamped(18));
//! assert_eq!(tip.cents(), 1_800); // 18.00
//!
//! // Four people share the bill plus tip
//! let share = calculate_total_per_person(bill, SplitCount::clamped(4), TipPercent::clamped(18));
//! assert_eq!(share.cents(), 2_950); // 29.50 each
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod form;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tipsplit_core::Money` instead of
// `use tipsplit_core::money::Money`

pub use engine::{calculate_tip, calculate_total_per_person, split_bill, BillSplit};
pub use error::ValidationError;
pub use form::BillForm;
pub use money::Money;
pub use types::{SplitCount, TipPercent};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum number of people a bill can be split between.
///
/// A bill always has at least the payer. Raw split input below this clamps
/// up to 1, which also makes division by zero unrepresentable in the engine.
pub const MIN_SPLIT: u32 = 1;

/// Maximum number of people a bill can be split between.
///
/// ## Business Reason
/// Matches the +/- control bounds on the screen and keeps per-person shares
/// from collapsing to meaningless fractions of a cent.
pub const MAX_SPLIT: u32 = 100;

/// Maximum tip percentage.
///
/// The tip slider spans 0% to 100% of the bill.
pub const MAX_TIP_PERCENT: u32 = 100;

/// Bills at or below this many cents never produce a tip.
///
/// ## Business Reason
/// Guards degenerate/near-zero bills (a 0.50 bill tipping 0.25 is noise,
/// not gratuity). The tip engine returns zero for any bill <= 1.00.
pub const MIN_TIPPABLE_CENTS: i64 = 100;

/// Number of discrete steps on the tip slider (2% increments across 0-100%).
///
/// The slider itself belongs to the screen layer; this constant exists so
/// both sides agree on the granularity.
pub const SLIDER_STEPS: u32 = 50;
