//! # Bill Commands
//!
//! Tauri commands for the bill-splitting session.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────────┐     ┌──────────────┐                │
//! │  │ Defaults │────►│ User editing │────►│ Split result │                │
//! │  │ (2, 15%, │     │              │     │ on screen    │                │
//! │  │  8.5%)   │     └──────────────┘     └──────────────┘                │
//! │  └──────────┘          │                                               │
//! │       ▲           update_bill_field                                    │
//! │       │           adjust_bill_field                                    │
//! │       │                │                                               │
//! │       └──────── reset_bill ◄───────────────────────────                │
//! │                                                                         │
//! │  Every command answers with a full BillView so the frontend always     │
//! │  re-renders from one consistent snapshot: the raw input, the error     │
//! │  map, and a freshly computed breakdown.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{BillSession, BillState};
use patungan_core::{BillField, BillInput, BillResult, FieldErrors};

/// Full session snapshot: what the form shows, what's wrong, what it costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillView {
    /// Raw field text, exactly as typed.
    pub input: BillInput,

    /// Validation message per field; an absent key means the field is valid.
    /// Advisory only: `result` below is computed regardless.
    pub errors: FieldErrors,

    /// The derived breakdown for the current input.
    pub result: BillResult,
}

impl From<&BillSession> for BillView {
    fn from(session: &BillSession) -> Self {
        BillView {
            input: session.input.clone(),
            errors: session.errors.clone(),
            result: session.result(),
        }
    }
}

/// Gets the current session snapshot.
///
/// ## When Used
/// - App startup, to render the default form (2 people, 15% tip, 8.5% tax)
/// - Window refocus / hot reload, to resync the frontend
#[tauri::command]
pub fn get_bill(bill: State<'_, BillState>) -> BillView {
    debug!("get_bill command");
    bill.with_session(BillView::from)
}

/// Stores one field's raw text and returns the recomputed snapshot.
///
/// This is the keystroke path. Quick-tip preset buttons also land here
/// (they are just a `tipPercentage` update with a preset value).
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User types "120000" into Total Bill                                    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  invoke('update_bill_field', { field: 'totalBill', value: '120000' })  │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Resolve field name (unknown name → UNKNOWN_FIELD error)    │    │
/// │  │  2. Store raw text, re-validate that one field                 │    │
/// │  │  3. Recompute the whole breakdown                              │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Per-person amount and breakdown re-render                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Arguments
/// * `field` - camelCase field name (`totalBill`, `numberOfPeople`, ...)
/// * `value` - raw text, stored as typed
///
/// ## Errors
/// Only an unrecognized field name fails. An invalid VALUE never does: its
/// message comes back inside `BillView.errors` instead.
#[tauri::command]
pub fn update_bill_field(
    bill: State<'_, BillState>,
    field: String,
    value: String,
) -> Result<BillView, ApiError> {
    debug!(field = %field, value = %value, "update_bill_field command");
    let field: BillField = field.parse()?;

    Ok(bill.with_session_mut(|s| {
        s.set_field(field, value);
        BillView::from(&*s)
    }))
}

/// Steps a field by `delta` via the +/- buttons.
///
/// ## Behavior
/// - Invalid current text counts as 0 before the step
/// - The result clamps at 0 (stepping below zero is a no-op at the floor)
/// - The new text runs through the same validation as typing it would
///
/// ## Arguments
/// * `field` - camelCase field name
/// * `delta` - step amount, typically 1.0 or -1.0
#[tauri::command]
pub fn adjust_bill_field(
    bill: State<'_, BillState>,
    field: String,
    delta: f64,
) -> Result<BillView, ApiError> {
    debug!(field = %field, delta = %delta, "adjust_bill_field command");
    let field: BillField = field.parse()?;

    Ok(bill.with_session_mut(|s| {
        s.adjust(field, delta);
        BillView::from(&*s)
    }))
}

/// Resets the session to its defaults and clears every field error.
///
/// No confirmation step; irreversible for the entered values.
#[tauri::command]
pub fn reset_bill(bill: State<'_, BillState>) -> BillView {
    debug!("reset_bill command");

    bill.with_session_mut(|s| {
        s.reset();
        BillView::from(&*s)
    })
}
