//! # Tauri Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── bill.rs     ◄─── Session reads/mutations (the whole calculator)
//! └── config.rs   ◄─── Configuration and currency formatting
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const view = await invoke('update_bill_field', {                       │
//! │    field: 'tipPercentage',                                              │
//! │    value: '18'                                                          │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn update_bill_field(                                                  │
//! │      bill: State<'_, BillState>,  ◄── Injected by Tauri                │
//! │      field: String,               ◄── From invoke params               │
//! │      value: String,               ◄── From invoke params               │
//! │  ) -> Result<BillView, ApiError>                                        │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { input, errors, result }                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn get_bill(bill: State<'_, BillState>)
//!
//! // Only needs config
//! fn format_amount(config: State<'_, ConfigState>, amount: f64)
//! ```

pub mod bill;
pub mod config;
