//! # Domain Types
//!
//! Core domain types used throughout Patungan.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌──────────────────┐  │
//! │  │    BillField    │   │      BillInput      │   │    BillResult    │  │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ──────────────  │  │
//! │  │  TotalBill      │   │  total_bill: ""     │   │  subtotal        │  │
//! │  │  NumberOfPeople │   │  number_of_people   │   │  tip_amount      │  │
//! │  │  TipPercentage  │   │  tip_percentage     │   │  tax_amount      │  │
//! │  │  TaxPercentage  │   │  tax_percentage     │   │  ...             │  │
//! │  │  ServiceCharge  │   │  service_charge     │   │  total_amount    │  │
//! │  │  AdditionalFees │   │  additional_fees    │   │  amount_per_...  │  │
//! │  └─────────────────┘   └─────────────────────┘   └──────────────────┘  │
//! │                                                                         │
//! │  BillInput holds RAW TEXT (what the user typed).                       │
//! │  BillResult holds DERIVED NUMBERS (what the engine computed).          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw Text, Not Numbers
//! Every `BillInput` field is a `String`, never a parsed number. An empty
//! string means "not entered", which the UI must distinguish from an entered
//! `"0"`. Parsing happens permissively inside the calculation engine.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{DEFAULT_PEOPLE, DEFAULT_TAX_PERCENTAGE, DEFAULT_TIP_PERCENTAGE};

// =============================================================================
// Bill Field
// =============================================================================

/// The six input fields of the bill form.
///
/// ## Why an Enum?
/// The frontend addresses fields by their camelCase name (`"totalBill"`).
/// A closed enum means an unknown name is rejected once at the command
/// boundary instead of silently creating a seventh field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum BillField {
    /// The raw bill amount before tip, tax, or fees.
    TotalBill,

    /// Party size the total is divided across.
    NumberOfPeople,

    /// Tip rate applied to the subtotal (percent).
    TipPercentage,

    /// Tax rate applied to the subtotal (percent).
    TaxPercentage,

    /// Flat service charge added to the total.
    ServiceCharge,

    /// Flat extra fees added to the total.
    AdditionalFees,
}

impl BillField {
    /// All fields, in form order.
    pub const ALL: [BillField; 6] = [
        BillField::TotalBill,
        BillField::NumberOfPeople,
        BillField::TipPercentage,
        BillField::TaxPercentage,
        BillField::ServiceCharge,
        BillField::AdditionalFees,
    ];

    /// The camelCase name used by the frontend and in serialized payloads.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BillField::TotalBill => "totalBill",
            BillField::NumberOfPeople => "numberOfPeople",
            BillField::TipPercentage => "tipPercentage",
            BillField::TaxPercentage => "taxPercentage",
            BillField::ServiceCharge => "serviceCharge",
            BillField::AdditionalFees => "additionalFees",
        }
    }

    /// Whether this field holds a percentage rate (subject to the ≤100 rule).
    pub const fn is_percentage(&self) -> bool {
        matches!(self, BillField::TipPercentage | BillField::TaxPercentage)
    }
}

impl fmt::Display for BillField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "totalBill" => Ok(BillField::TotalBill),
            "numberOfPeople" => Ok(BillField::NumberOfPeople),
            "tipPercentage" => Ok(BillField::TipPercentage),
            "taxPercentage" => Ok(BillField::TaxPercentage),
            "serviceCharge" => Ok(BillField::ServiceCharge),
            "additionalFees" => Ok(BillField::AdditionalFees),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Returned when the frontend sends a field name that isn't part of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown bill field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

// =============================================================================
// Field Errors
// =============================================================================

/// Mapping from field to its current user-facing validation message.
///
/// An absent key means the field is valid. Messages are advisory: the
/// calculation engine runs regardless (invalid text parses as a fallback).
pub type FieldErrors = BTreeMap<BillField, String>;

// =============================================================================
// Bill Input
// =============================================================================

/// The raw text of the six bill fields, exactly as typed.
///
/// ## Lifecycle
/// Created with [`BillInput::default`] at session start, mutated one field at
/// a time by keystrokes and stepper buttons, overwritten wholesale on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillInput {
    pub total_bill: String,
    pub number_of_people: String,
    pub tip_percentage: String,
    pub tax_percentage: String,
    pub service_charge: String,
    pub additional_fees: String,
}

impl BillInput {
    /// Returns the raw text of one field.
    pub fn get(&self, field: BillField) -> &str {
        match field {
            BillField::TotalBill => &self.total_bill,
            BillField::NumberOfPeople => &self.number_of_people,
            BillField::TipPercentage => &self.tip_percentage,
            BillField::TaxPercentage => &self.tax_percentage,
            BillField::ServiceCharge => &self.service_charge,
            BillField::AdditionalFees => &self.additional_fees,
        }
    }

    /// Overwrites the raw text of one field.
    pub fn set(&mut self, field: BillField, value: String) {
        match field {
            BillField::TotalBill => self.total_bill = value,
            BillField::NumberOfPeople => self.number_of_people = value,
            BillField::TipPercentage => self.tip_percentage = value,
            BillField::TaxPercentage => self.tax_percentage = value,
            BillField::ServiceCharge => self.service_charge = value,
            BillField::AdditionalFees => self.additional_fees = value,
        }
    }
}

impl Default for BillInput {
    /// The documented session defaults: 2 people, 15% tip, 8.5% tax,
    /// everything else not yet entered.
    fn default() -> Self {
        BillInput {
            total_bill: String::new(),
            number_of_people: DEFAULT_PEOPLE.to_string(),
            tip_percentage: DEFAULT_TIP_PERCENTAGE.to_string(),
            tax_percentage: DEFAULT_TAX_PERCENTAGE.to_string(),
            service_charge: String::new(),
            additional_fees: String::new(),
        }
    }
}

// =============================================================================
// Bill Result
// =============================================================================

/// The derived breakdown for the current input.
///
/// ## Invariants
/// - `total_amount` = subtotal + tip + tax + service charge + fees
/// - `amount_per_person` = `total_amount` / people, people ≥ 1
/// - Never NaN or infinite for any text input
/// - No rounding: amounts carry full precision until display formatting
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillResult {
    pub subtotal: f64,
    pub tip_amount: f64,
    pub tax_amount: f64,
    pub service_charge_amount: f64,
    pub additional_fees_amount: f64,
    pub total_amount: f64,
    pub amount_per_person: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_round_trips_through_name() {
        for field in BillField::ALL {
            assert_eq!(field.as_str().parse::<BillField>().unwrap(), field);
        }
        assert!("grandTotal".parse::<BillField>().is_err());
    }

    #[test]
    fn test_field_serde_uses_camel_case() {
        let json = serde_json::to_string(&BillField::NumberOfPeople).unwrap();
        assert_eq!(json, "\"numberOfPeople\"");
    }

    #[test]
    fn test_default_input() {
        let input = BillInput::default();
        assert_eq!(input.total_bill, "");
        assert_eq!(input.number_of_people, "2");
        assert_eq!(input.tip_percentage, "15");
        assert_eq!(input.tax_percentage, "8.5");
        assert_eq!(input.service_charge, "");
        assert_eq!(input.additional_fees, "");
    }

    #[test]
    fn test_get_set_cover_every_field() {
        let mut input = BillInput::default();
        for field in BillField::ALL {
            input.set(field, format!("value-{}", field));
            assert_eq!(input.get(field), format!("value-{}", field));
        }
    }
}
