//! # Validation Module
//!
//! Input validation at the screen boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen widgets                                               │
//! │  ├── Numeric keyboard on the bill field                                │
//! │  └── +/- buttons and slider already bounded                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Bill text must parse as a non-negative two-decimal amount        │
//! │  └── Raw numeric input checked against the documented ranges          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain types (types.rs)                                      │
//! │  └── SplitCount / TipPercent clamp at construction                     │
//! │                                                                         │
//! │  Defense in depth: the engine only ever sees values in range           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::validation::{validate_bill_text, validate_split_count};
//!
//! // Parse the bill field before invoking the engine
//! let bill = validate_bill_text("134.50").unwrap();
//! assert_eq!(bill.cents(), 13_450);
//!
//! // Check a raw split count against its range
//! validate_split_count(4).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_SPLIT, MAX_TIP_PERCENT, MIN_SPLIT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Bill Text
// =============================================================================

/// Validates and parses the bill field text.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must parse as a non-negative amount with at most two fraction digits
///
/// This is the invalid-amount gate: while this returns an error the screen
/// shows no split/tip controls and the engine is not invoked at all.
///
/// ## Example
/// ```rust
/// use tipsplit_core::validation::validate_bill_text;
///
/// assert!(validate_bill_text("134.50").is_ok());
/// assert!(validate_bill_text("").is_err());
/// assert!(validate_bill_text("lunch").is_err());
/// ```
pub fn validate_bill_text(text: &str) -> ValidationResult<Money> {
    text.parse()
}

// =============================================================================
// Numeric Ranges
// =============================================================================

/// Validates a raw split count against [1, 100].
///
/// The domain type clamps silently; this validator is for contexts that
/// want to surface the range violation instead (e.g. a debug overlay or a
/// future free-form "number of people" field).
pub fn validate_split_count(count: i64) -> ValidationResult<()> {
    if count < MIN_SPLIT as i64 || count > MAX_SPLIT as i64 {
        return Err(ValidationError::OutOfRange {
            field: "split".to_string(),
            min: MIN_SPLIT as i64,
            max: MAX_SPLIT as i64,
        });
    }

    Ok(())
}

/// Validates a raw tip percentage against [0, 100].
pub fn validate_tip_percent(percent: i64) -> ValidationResult<()> {
    if percent < 0 || percent > MAX_TIP_PERCENT as i64 {
        return Err(ValidationError::OutOfRange {
            field: "tip".to_string(),
            min: 0,
            max: MAX_TIP_PERCENT as i64,
        });
    }

    Ok(())
}

/// Validates a slider position: finite and within [0.0, 1.0].
///
/// ## Rules
/// - NaN and infinities are invalid (a widget should never report them,
///   but a float is a float)
/// - Must lie in [0.0, 1.0]
pub fn validate_slider_position(position: f64) -> ValidationResult<()> {
    if !position.is_finite() || !(0.0..=1.0).contains(&position) {
        return Err(ValidationError::OutOfRange {
            field: "slider position".to_string(),
            min: 0,
            max: 1,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bill_text() {
        // Valid bill text
        assert_eq!(validate_bill_text("134").unwrap().cents(), 13_400);
        assert_eq!(validate_bill_text(" 12.5 ").unwrap().cents(), 1_250);
        assert_eq!(validate_bill_text("0.99").unwrap().cents(), 99);

        // Invalid bill text
        assert!(validate_bill_text("").is_err());
        assert!(validate_bill_text("   ").is_err());
        assert!(validate_bill_text("12.345").is_err());
        assert!(validate_bill_text("-3").is_err());
        assert!(validate_bill_text("12€").is_err());
    }

    #[test]
    fn test_validate_split_count() {
        assert!(validate_split_count(1).is_ok());
        assert!(validate_split_count(50).is_ok());
        assert!(validate_split_count(100).is_ok());

        assert!(validate_split_count(0).is_err());
        assert!(validate_split_count(-1).is_err());
        assert!(validate_split_count(101).is_err());
    }

    #[test]
    fn test_validate_tip_percent() {
        assert!(validate_tip_percent(0).is_ok());
        assert!(validate_tip_percent(18).is_ok());
        assert!(validate_tip_percent(100).is_ok());

        assert!(validate_tip_percent(-1).is_err());
        assert!(validate_tip_percent(101).is_err());
    }

    #[test]
    fn test_validate_slider_position() {
        assert!(validate_slider_position(0.0).is_ok());
        assert!(validate_slider_position(0.18).is_ok());
        assert!(validate_slider_position(1.0).is_ok());

        assert!(validate_slider_position(-0.1).is_err());
        assert!(validate_slider_position(1.1).is_err());
        assert!(validate_slider_position(f64::NAN).is_err());
        assert!(validate_slider_position(f64::INFINITY).is_err());
    }
}
