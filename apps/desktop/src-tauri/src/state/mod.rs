//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(bill_state);                                        │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                     │                        │                          │
//! │                     ▼                        ▼                          │
//! │        ┌────────────────────┐   ┌──────────────────────┐               │
//! │        │     BillState      │   │     ConfigState      │               │
//! │        │                    │   │                      │               │
//! │        │  Arc<Mutex<        │   │  currency + locale   │               │
//! │        │    BillSession     │   │  tip presets         │               │
//! │        │  >>                │   │                      │               │
//! │        └────────────────────┘   └──────────────────────┘               │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • BillState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod bill;
mod config;

pub use bill::{BillSession, BillState};
pub use config::ConfigState;
