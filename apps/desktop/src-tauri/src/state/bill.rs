//! # Bill Session State
//!
//! Manages the current bill-splitting session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the session
//! 2. Only one command should modify it at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Session Operations                              │
//! │                                                                         │
//! │  Frontend Action          Tauri Command            Session Change       │
//! │  ───────────────          ─────────────            ──────────────       │
//! │                                                                         │
//! │  Keystroke ──────────────► update_bill_field() ──► set_field(raw)      │
//! │                                                                         │
//! │  Click +/- ──────────────► adjust_bill_field() ──► adjust(delta)       │
//! │                                                                         │
//! │  Click Reset ────────────► reset_bill() ─────────► reset()             │
//! │                                                                         │
//! │  Render ─────────────────► get_bill() ───────────► (read only)         │
//! │                                                                         │
//! │  Every mutation re-validates the touched field, and every snapshot     │
//! │  recomputes the full BillResult. There is no cached result to drift.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use patungan_core::{
    adjust_value, calculate, validate_field, BillField, BillInput, BillResult, FieldErrors,
};
use serde::{Deserialize, Serialize};

/// The current bill-splitting session.
///
/// ## Invariants
/// - `errors` only ever holds messages produced by `validate_field` for the
///   raw text currently in `input` (mutation and validation happen together)
/// - Errors are advisory: `result()` always computes over the current text
/// - A reset restores `BillInput::default()` and clears every error
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSession {
    /// Raw field text, exactly as typed.
    pub input: BillInput,

    /// Current validation message per field (absent = valid).
    pub errors: FieldErrors,

    /// When the session started/was last reset.
    pub started_at: DateTime<Utc>,
}

impl BillSession {
    /// Creates a fresh session with the documented defaults.
    pub fn new() -> Self {
        BillSession {
            input: BillInput::default(),
            errors: FieldErrors::new(),
            started_at: Utc::now(),
        }
    }

    /// Stores raw text for one field and re-validates that field.
    ///
    /// This is the single input-change path: keystrokes, stepper buttons,
    /// and quick-tip presets all funnel through here, so the error map can
    /// never disagree with the text it describes.
    pub fn set_field(&mut self, field: BillField, value: String) {
        match validate_field(field, &value) {
            Some(err) => {
                self.errors.insert(field, err.to_string());
            }
            None => {
                self.errors.remove(&field);
            }
        }
        self.input.set(field, value);
    }

    /// Steps a field by `delta` (clamped at zero) through the normal
    /// input-change path, so validation re-runs on the new text.
    pub fn adjust(&mut self, field: BillField, delta: f64) {
        let next = adjust_value(self.input.get(field), delta);
        self.set_field(field, next);
    }

    /// Restores the default input and clears all errors.
    ///
    /// No confirmation step; the entered values are gone for good.
    pub fn reset(&mut self) {
        self.input = BillInput::default();
        self.errors.clear();
        self.started_at = Utc::now();
    }

    /// Derives the breakdown for the current input.
    pub fn result(&self) -> BillResult {
        calculate(&self.input)
    }
}

impl Default for BillSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Tauri-managed session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<BillSession>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one command mutates the session at a time
///
/// ## Why Not RwLock?
/// Session operations are quick and most of them mutate state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug)]
pub struct BillState {
    session: Arc<Mutex<BillSession>>,
}

impl BillState {
    /// Creates state holding a fresh session.
    pub fn new() -> Self {
        BillState {
            session: Arc::new(Mutex::new(BillSession::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let result = bill_state.with_session(|s| s.result());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BillSession) -> R,
    {
        let session = self.session.lock().expect("Bill session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// bill_state.with_session_mut(|s| s.set_field(field, value));
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BillSession) -> R,
    {
        let mut session = self.session.lock().expect("Bill session mutex poisoned");
        f(&mut session)
    }
}

impl Default for BillState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_has_defaults_and_no_errors() {
        let session = BillSession::new();
        assert_eq!(session.input, BillInput::default());
        assert!(session.errors.is_empty());
        assert_eq!(session.result().total_amount, 0.0);
    }

    #[test]
    fn test_set_field_stores_text_and_error_together() {
        let mut session = BillSession::new();

        session.set_field(BillField::TipPercentage, "150".to_string());
        assert_eq!(session.input.tip_percentage, "150");
        assert_eq!(
            session.errors.get(&BillField::TipPercentage).unwrap(),
            "Percentage cannot exceed 100%"
        );

        // Fixing the field clears its message
        session.set_field(BillField::TipPercentage, "20".to_string());
        assert!(!session.errors.contains_key(&BillField::TipPercentage));
    }

    #[test]
    fn test_invalid_field_still_feeds_the_engine() {
        let mut session = BillSession::new();
        session.set_field(BillField::TotalBill, "100".to_string());
        session.set_field(BillField::TaxPercentage, "abc".to_string());

        // Error displayed...
        assert!(session.errors.contains_key(&BillField::TaxPercentage));

        // ...but the engine runs with tax coerced to 0 (advisory semantics)
        let result = session.result();
        assert_eq!(result.tax_amount, 0.0);
        assert_eq!(result.subtotal, 100.0);
    }

    #[test]
    fn test_adjust_goes_through_validation() {
        let mut session = BillSession::new();

        session.adjust(BillField::NumberOfPeople, 1.0);
        assert_eq!(session.input.number_of_people, "3");
        assert!(session.errors.is_empty());

        // Stepping down from garbage text lands on a valid "0"-clamped value,
        // which for party size is itself invalid and must say so
        session.set_field(BillField::NumberOfPeople, "x".to_string());
        session.adjust(BillField::NumberOfPeople, -1.0);
        assert_eq!(session.input.number_of_people, "0");
        assert_eq!(
            session.errors.get(&BillField::NumberOfPeople).unwrap(),
            "Number of people must be a positive whole number"
        );
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_errors() {
        let mut session = BillSession::new();
        session.set_field(BillField::TotalBill, "-1".to_string());
        session.set_field(BillField::NumberOfPeople, "0".to_string());
        session.set_field(BillField::TipPercentage, "999".to_string());
        assert_eq!(session.errors.len(), 3);

        session.reset();

        assert_eq!(session.input.number_of_people, "2");
        assert_eq!(session.input.tip_percentage, "15");
        assert_eq!(session.input.tax_percentage, "8.5");
        assert_eq!(session.input.total_bill, "");
        assert!(session.errors.is_empty());
    }

    #[test]
    fn test_state_wrapper_mutation_is_visible() {
        let state = BillState::new();
        state.with_session_mut(|s| s.set_field(BillField::TotalBill, "60".to_string()));
        let per_person = state.with_session(|s| s.result().amount_per_person);
        // 60 + 15% tip + 8.5% tax = 74.1, split across the default 2 people
        assert!((per_person - 37.05).abs() < 1e-9);
    }
}
