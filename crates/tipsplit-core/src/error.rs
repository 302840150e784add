//! # Error Types
//!
//! Validation error types for tipsplit-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipsplit-core errors (this file)                                      │
//! │  └── ValidationError  - Input validation failures at the UI boundary   │
//! │                                                                         │
//! │  The engine itself is total: once inputs have passed validation and    │
//! │  been clamped into their domain types, no calculation can fail.        │
//! │                                                                         │
//! │  Flow: user input → ValidationError → screen message                   │
//! │        valid input → engine → always a result                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// The screen layer catches them and withholds the calculation controls
/// until the input is fixed; the engine is never exposed to bad input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    ///
    /// ## When This Occurs
    /// The bill field is empty or whitespace. The screen treats this as
    /// "no bill yet" rather than an error message.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., letters in the bill field).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be non-negative.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// More fraction digits than the currency carries.
    ///
    /// ## When This Occurs
    /// The user types "12.345". Amounts are whole cents; accepting this
    /// would silently drop the trailing digit.
    #[error("{field} allows at most {max_decimals} decimal places")]
    TooPrecise { field: String, max_decimals: u32 },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount is required");

        let err = ValidationError::OutOfRange {
            field: "split".to_string(),
            min: 1,
            max: 100,
        };
        assert_eq!(err.to_string(), "split must be between 1 and 100");

        let err = ValidationError::TooPrecise {
            field: "amount".to_string(),
            max_decimals: 2,
        };
        assert_eq!(err.to_string(), "amount allows at most 2 decimal places");
    }
}
