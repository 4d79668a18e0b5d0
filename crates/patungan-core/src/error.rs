//! # Error Types
//!
//! Domain-specific error types for patungan-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  patungan-core errors (this file)                                      │
//! │  └── ValidationError  - Per-field input validation failures            │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What frontend sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → FieldErrors map → Frontend (advisory)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant's Display IS the user-facing message shown under a field
//! 4. Validation errors are ADVISORY: they never abort a recalculation

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when the raw text in a bill field doesn't meet its rules.
/// They are surfaced beneath the offending field and never block the
/// calculation engine, which coerces invalid text to fallback values.
///
/// ## User Workflow
/// ```text
/// User types "150" into Tip %
///      │
///      ▼
/// validate_field(TipPercentage, "150")
///      │
///      ▼
/// PercentageOutOfRange → "Percentage cannot exceed 100%" under the field
///      │
///      ▼
/// calculate() still runs over the typed values
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Text is not a finite, non-negative number.
    #[error("Please enter a valid positive number")]
    InvalidNumber,

    /// Party size is zero or not a whole number.
    #[error("Number of people must be a positive whole number")]
    InvalidPartySize,

    /// Tip or tax rate exceeds 100%.
    #[error("Percentage cannot exceed 100%")]
    PercentageOutOfRange,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidNumber.to_string(),
            "Please enter a valid positive number"
        );
        assert_eq!(
            ValidationError::InvalidPartySize.to_string(),
            "Number of people must be a positive whole number"
        );
        assert_eq!(
            ValidationError::PercentageOutOfRange.to_string(),
            "Percentage cannot exceed 100%"
        );
    }
}
