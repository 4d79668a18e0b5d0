//! # Bill Calculation Engine
//!
//! The pure math at the heart of Patungan.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Recompute On Every Change                           │
//! │                                                                         │
//! │  User edit ──► BillInput updated ──► validate_field (advisory)         │
//! │                        │                                                │
//! │                        ▼                                                │
//! │              calculate(&input) ← THIS MODULE                            │
//! │                        │                                                │
//! │                        ▼                                                │
//! │              BillResult replaces the previous one ──► display          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Permissive Parsing
//! The engine is TOTAL: any text input yields a result. Unparsable or empty
//! amounts become 0; the party size becomes 1 when unparsable, empty, or zero,
//! so division by zero cannot occur. A field can therefore carry a validation
//! message and still contribute a fallback value to the same recalculation.
//!
//! ## No Internal Rounding
//! Amounts stay at full `f64` precision end to end. Rounding to whole
//! currency happens once, at display formatting in the app layer.

use crate::types::{BillField, BillInput, BillResult};

// =============================================================================
// Permissive Parsers
// =============================================================================

/// Parses an amount or percentage field, falling back to 0.
///
/// ## Example
/// ```rust
/// use patungan_core::bill::parse_amount;
///
/// assert_eq!(parse_amount("120000"), 120000.0);
/// assert_eq!(parse_amount("  8.5 "), 8.5);
/// assert_eq!(parse_amount(""), 0.0);
/// assert_eq!(parse_amount("abc"), 0.0);
/// ```
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parses the party size, falling back to 1.
///
/// Fractional text truncates toward zero (`"2.9"` → 2 people), matching the
/// integer parse the rest of the system assumes. Zero, negative, empty, and
/// unparsable text all collapse to 1 so the per-person division is safe.
///
/// ## Example
/// ```rust
/// use patungan_core::bill::parse_people;
///
/// assert_eq!(parse_people("4"), 4);
/// assert_eq!(parse_people("2.9"), 2);
/// assert_eq!(parse_people("0"), 1);
/// assert_eq!(parse_people(""), 1);
/// ```
pub fn parse_people(raw: &str) -> i64 {
    let parsed = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
        .unwrap_or(0);

    if parsed <= 0 {
        1
    } else {
        parsed
    }
}

// =============================================================================
// Calculation Engine
// =============================================================================

/// Derives the full bill breakdown from the current raw input.
///
/// Pure and total: same input always yields the same result, and every text
/// input yields one (see module docs on permissive parsing).
///
/// ## Formula
/// ```text
/// tip    = subtotal × tip% / 100
/// tax    = subtotal × tax% / 100
/// total  = subtotal + tip + tax + service charge + additional fees
/// person = total / people
/// ```
///
/// ## Example
/// ```rust
/// use patungan_core::{calculate, BillInput};
///
/// let input = BillInput {
///     total_bill: "100".to_string(),
///     number_of_people: "2".to_string(),
///     tip_percentage: "10".to_string(),
///     tax_percentage: "0".to_string(),
///     service_charge: String::new(),
///     additional_fees: String::new(),
/// };
///
/// let result = calculate(&input);
/// assert_eq!(result.tip_amount, 10.0);
/// assert_eq!(result.total_amount, 110.0);
/// assert_eq!(result.amount_per_person, 55.0);
/// ```
pub fn calculate(input: &BillInput) -> BillResult {
    let subtotal = parse_amount(&input.total_bill);
    let people = parse_people(&input.number_of_people);
    let tip_percent = parse_amount(&input.tip_percentage);
    let tax_percent = parse_amount(&input.tax_percentage);
    let service_charge = parse_amount(&input.service_charge);
    let additional_fees = parse_amount(&input.additional_fees);

    let tip_amount = subtotal * tip_percent / 100.0;
    let tax_amount = subtotal * tax_percent / 100.0;
    let total_amount = subtotal + tip_amount + tax_amount + service_charge + additional_fees;
    let amount_per_person = total_amount / people as f64;

    BillResult {
        subtotal,
        tip_amount,
        tax_amount,
        service_charge_amount: service_charge,
        additional_fees_amount: additional_fees,
        total_amount,
        amount_per_person,
    }
}

// =============================================================================
// Adjustment Helper
// =============================================================================

/// Steps a field's raw text by `delta`, clamping at zero.
///
/// Used by the +/- buttons next to the party-size and tip fields. The result
/// feeds back through the same input-change path as manual typing, so
/// validation re-runs on it.
///
/// ## Example
/// ```rust
/// use patungan_core::bill::adjust_value;
///
/// assert_eq!(adjust_value("2", 1.0), "3");
/// assert_eq!(adjust_value("0", -1.0), "0");   // never negative
/// assert_eq!(adjust_value("garbage", 1.0), "1"); // invalid text counts as 0
/// assert_eq!(adjust_value("8.5", 1.0), "9.5");
/// ```
pub fn adjust_value(raw: &str, delta: f64) -> String {
    let current = parse_amount(raw);
    let adjusted = (current + delta).max(0.0);
    format_number(adjusted)
}

/// Serializes a number the way the form expects it back.
///
/// Whole values render without a fractional part (`"3"`, not `"3.0"`) so
/// they keep matching the quick-preset buttons' labels.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Convenience: steps one field of an input record in place.
///
/// Returns the new raw text so the caller can re-validate the field, exactly
/// as it would after a keystroke.
pub fn adjust_field(input: &mut BillInput, field: BillField, delta: f64) -> String {
    let next = adjust_value(input.get(field), delta);
    input.set(field, next.clone());
    next
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        total: &str,
        people: &str,
        tip: &str,
        tax: &str,
        service: &str,
        fees: &str,
    ) -> BillInput {
        BillInput {
            total_bill: total.to_string(),
            number_of_people: people.to_string(),
            tip_percentage: tip.to_string(),
            tax_percentage: tax.to_string(),
            service_charge: service.to_string(),
            additional_fees: fees.to_string(),
        }
    }

    #[test]
    fn test_basic_split() {
        let result = calculate(&input("100", "2", "10", "0", "0", "0"));

        assert_eq!(result.subtotal, 100.0);
        assert_eq!(result.tip_amount, 10.0);
        assert_eq!(result.tax_amount, 0.0);
        assert_eq!(result.total_amount, 110.0);
        assert_eq!(result.amount_per_person, 55.0);
    }

    #[test]
    fn test_flat_fees_are_not_percentage_based() {
        // Service charge and fees add directly, they are not scaled by subtotal
        let result = calculate(&input("200", "4", "0", "0", "20", "10"));

        assert_eq!(result.service_charge_amount, 20.0);
        assert_eq!(result.additional_fees_amount, 10.0);
        assert_eq!(result.total_amount, 230.0);
        assert_eq!(result.amount_per_person, 57.5);
    }

    #[test]
    fn test_empty_total_yields_zero_result() {
        let result = calculate(&input("", "2", "15", "8.5", "", ""));

        assert_eq!(result.subtotal, 0.0);
        assert_eq!(result.tip_amount, 0.0);
        assert_eq!(result.tax_amount, 0.0);
        assert_eq!(result.total_amount, 0.0);
        assert_eq!(result.amount_per_person, 0.0);
    }

    #[test]
    fn test_total_invariant_holds() {
        let result = calculate(&input("120000", "3", "15", "8.5", "5000", "2500"));

        let expected_total = result.subtotal
            + result.tip_amount
            + result.tax_amount
            + result.service_charge_amount
            + result.additional_fees_amount;
        assert_eq!(result.total_amount, expected_total);
        assert_eq!(result.amount_per_person, expected_total / 3.0);
    }

    #[test]
    fn test_never_divides_by_zero() {
        for people in ["", "0", "-3", "abc", "0.4"] {
            let result = calculate(&input("100", people, "0", "0", "0", "0"));
            assert_eq!(result.amount_per_person, 100.0, "people text {:?}", people);
        }
    }

    #[test]
    fn test_engine_is_total_over_garbage_input() {
        // Invalid text in a field still displays an error, but the engine
        // keeps running over fallback values
        let cases = [
            input("abc", "x", "nan", "inf", "-", "1e999"),
            input("NaN", "NaN", "NaN", "NaN", "NaN", "NaN"),
            input("", "", "", "", "", ""),
        ];
        for case in cases {
            let result = calculate(&case);
            assert!(result.total_amount.is_finite());
            assert!(result.amount_per_person.is_finite());
        }
    }

    #[test]
    fn test_fractional_people_truncate() {
        // "2.9" people computes as 2, matching the integer parse the
        // validator complains about
        let result = calculate(&input("100", "2.9", "0", "0", "0", "0"));
        assert_eq!(result.amount_per_person, 50.0);
    }

    #[test]
    fn test_parse_amount_fallbacks() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(" 7 "), 7.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("12,5"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn test_adjust_steps_and_clamps() {
        assert_eq!(adjust_value("2", 1.0), "3");
        assert_eq!(adjust_value("2", -1.0), "1");
        assert_eq!(adjust_value("0", -1.0), "0");
        assert_eq!(adjust_value("0.5", -1.0), "0");
        assert_eq!(adjust_value("", 1.0), "1");
        assert_eq!(adjust_value("oops", -5.0), "0");
    }

    #[test]
    fn test_adjust_never_negative() {
        for (raw, delta) in [("3", -10.0), ("", -1.0), ("-5", -1.0), ("0", -0.5)] {
            let next = adjust_value(raw, delta);
            assert!(
                !next.starts_with('-'),
                "adjust_value({:?}, {}) = {:?}",
                raw,
                delta,
                next
            );
        }
    }

    #[test]
    fn test_adjust_keeps_fractions() {
        assert_eq!(adjust_value("8.5", 1.0), "9.5");
        assert_eq!(adjust_value("8.5", -1.0), "7.5");
    }

    #[test]
    fn test_adjust_field_updates_input() {
        let mut input = BillInput::default();
        let next = adjust_field(&mut input, BillField::NumberOfPeople, 1.0);
        assert_eq!(next, "3");
        assert_eq!(input.number_of_people, "3");
    }

    #[test]
    fn test_format_number_drops_trailing_zero() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.0), "0");
    }
}
