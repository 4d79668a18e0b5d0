//! # patungan-core: Pure Business Logic for Patungan
//!
//! This crate is the **heart** of Patungan, the bill-splitting calculator.
//! It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Patungan Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Frontend (WebView)                         │   │
//! │  │    Bill Form ──► Stepper Buttons ──► Breakdown ──► Per Person  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    update_bill_field, adjust_bill_field, reset_bill, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ patungan-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────────────────────┐  │   │
//! │  │   │   types   │  │   bill    │  │        validation         │  │   │
//! │  │   │ BillInput │  │ calculate │  │  per-field, advisory      │  │   │
//! │  │   │ BillResult│  │ adjust    │  │  never blocks the engine  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (BillField, BillInput, BillResult)
//! - [`bill`] - Calculation engine and stepper helper
//! - [`validation`] - Per-field advisory validation
//! - [`error`] - Validation error type
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and webview access are FORBIDDEN here
//! 3. **Total Engine**: `calculate` accepts ANY text and always returns a result
//! 4. **Advisory Errors**: validation messages inform the user, never gate math
//!
//! ## Example Usage
//!
//! ```rust
//! use patungan_core::{calculate, validate_field, BillField, BillInput};
//!
//! let mut input = BillInput::default();
//! input.set(BillField::TotalBill, "120000".to_string());
//!
//! // Validation is advisory...
//! assert!(validate_field(BillField::TotalBill, "120000").is_none());
//!
//! // ...and the engine always runs
//! let result = calculate(&input);
//! assert_eq!(result.amount_per_person, result.total_amount / 2.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use patungan_core::BillInput` instead of
// `use patungan_core::types::BillInput`

pub use bill::{adjust_field, adjust_value, calculate};
pub use error::ValidationError;
pub use types::{BillField, BillInput, BillResult, FieldErrors, UnknownField};
pub use validation::validate_field;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default party size when a session starts.
pub const DEFAULT_PEOPLE: &str = "2";

/// Default tip rate in percent.
pub const DEFAULT_TIP_PERCENTAGE: &str = "15";

/// Default tax rate in percent.
pub const DEFAULT_TAX_PERCENTAGE: &str = "8.5";

/// Upper bound for tip and tax rates.
///
/// ## Business Reason
/// A rate above 100% of the subtotal is almost certainly a typo
/// (e.g. typing the tip amount into the percentage field).
pub const MAX_PERCENTAGE: f64 = 100.0;
