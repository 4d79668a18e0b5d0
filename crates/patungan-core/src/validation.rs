//! # Validation Module
//!
//! Per-field input validation for the bill form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Strategy                                │
//! │                                                                         │
//! │  User types into a field                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_field(field, raw) ◄── THIS MODULE                            │
//! │       │                                                                 │
//! │       ├── Some(err) → message stored under the field, shown in red     │
//! │       │                                                                 │
//! │       └── None     → any previous message for the field is cleared     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate() runs EITHER WAY (errors are advisory, never blocking)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! - Empty text is always valid: every field is optional and reads as zero.
//! - Validation is stateless and strictly per-field. There is no cross-field
//!   consistency check.
//! - An invalid field still contributes its fallback value to the result.
//!
//! ## Usage
//! ```rust
//! use patungan_core::validation::validate_field;
//! use patungan_core::BillField;
//!
//! assert!(validate_field(BillField::TotalBill, "120000").is_none());
//! assert!(validate_field(BillField::NumberOfPeople, "0").is_some());
//! assert!(validate_field(BillField::TipPercentage, "150").is_some());
//! ```

use crate::error::ValidationError;
use crate::types::BillField;
use crate::MAX_PERCENTAGE;

/// Validates the raw text of one bill field.
///
/// Returns `None` when the text is acceptable, or the error whose `Display`
/// is the message to show beneath the field.
///
/// ## Rules Per Field
/// ```text
/// all fields        ── empty is valid; must otherwise parse as a finite
///                      number ≥ 0
/// numberOfPeople    ── additionally: must be a whole number ≥ 1
/// tipPercentage,
/// taxPercentage     ── additionally: must not exceed 100
/// ```
pub fn validate_field(field: BillField, raw: &str) -> Option<ValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return None;
    }

    let value = match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => return Some(ValidationError::InvalidNumber),
    };

    if field == BillField::NumberOfPeople && (value == 0.0 || value.fract() != 0.0) {
        return Some(ValidationError::InvalidPartySize);
    }

    if field.is_percentage() && value > MAX_PERCENTAGE {
        return Some(ValidationError::PercentageOutOfRange);
    }

    None
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_always_valid() {
        for field in BillField::ALL {
            assert_eq!(validate_field(field, ""), None);
            assert_eq!(validate_field(field, "   "), None);
        }
    }

    #[test]
    fn test_non_numeric_and_negative_rejected() {
        for field in BillField::ALL {
            assert_eq!(
                validate_field(field, "abc"),
                Some(ValidationError::InvalidNumber)
            );
            assert_eq!(
                validate_field(field, "-5"),
                Some(ValidationError::InvalidNumber)
            );
            assert_eq!(
                validate_field(field, "NaN"),
                Some(ValidationError::InvalidNumber)
            );
        }
    }

    #[test]
    fn test_party_size_rules() {
        assert_eq!(validate_field(BillField::NumberOfPeople, "3"), None);
        assert_eq!(validate_field(BillField::NumberOfPeople, "1"), None);

        assert_eq!(
            validate_field(BillField::NumberOfPeople, "0"),
            Some(ValidationError::InvalidPartySize)
        );
        assert_eq!(
            validate_field(BillField::NumberOfPeople, "2.5"),
            Some(ValidationError::InvalidPartySize)
        );
    }

    #[test]
    fn test_percentage_cap() {
        assert_eq!(validate_field(BillField::TipPercentage, "100"), None);
        assert_eq!(validate_field(BillField::TaxPercentage, "8.5"), None);

        assert_eq!(
            validate_field(BillField::TipPercentage, "150"),
            Some(ValidationError::PercentageOutOfRange)
        );
        assert_eq!(
            validate_field(BillField::TaxPercentage, "100.1"),
            Some(ValidationError::PercentageOutOfRange)
        );
    }

    #[test]
    fn test_cap_only_applies_to_percentage_fields() {
        // A 150 bill or 150 people is fine; only rates are capped
        assert_eq!(validate_field(BillField::TotalBill, "150"), None);
        assert_eq!(validate_field(BillField::NumberOfPeople, "150"), None);
        assert_eq!(validate_field(BillField::ServiceCharge, "150"), None);
    }

    #[test]
    fn test_zero_is_valid_everywhere_but_party_size() {
        assert_eq!(validate_field(BillField::TotalBill, "0"), None);
        assert_eq!(validate_field(BillField::TipPercentage, "0"), None);
        assert!(validate_field(BillField::NumberOfPeople, "0").is_some());
    }
}
