//! # Patungan Desktop Library
//!
//! Core library for the Patungan desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! patungan_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── bill.rs     ◄─── Bill session state management
//! │   └── config.rs   ◄─── Configuration state + currency formatting
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── bill.rs     ◄─── Session commands (update/adjust/reset/get)
//! │   └── config.rs   ◄─── Config retrieval and amount formatting
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri State Management                               │
//! │                                                                         │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐            │
//! │  │       BillState          │  │       ConfigState        │            │
//! │  │                          │  │                          │            │
//! │  │  • Raw field text        │  │  • Currency + locale     │            │
//! │  │  • Field error map       │  │  • Quick-tip presets     │            │
//! │  │  • Derived breakdown     │  │  • format_currency       │            │
//! │  └──────────────────────────┘  └──────────────────────────┘            │
//! │                                                                         │
//! │  WHY: Each command only requests the state it needs.                   │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{BillState, ConfigState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • BillState: default session with Mutex for thread-safe updates     │
/// │     • ConfigState: id-ID / IDR defaults, PATUNGAN_* env overrides       │
/// │                                                                         │
/// │  3. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// │                                                                         │
/// │  There is no database or network step: the session is purely in        │
/// │  memory and dies with the window.                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Patungan Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            use tauri::Manager;

            // Initialize state objects
            let bill_state = BillState::new();
            let config_state = ConfigState::from_env();

            // Register state with Tauri
            app.manage(bill_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Bill session commands
            commands::bill::get_bill,
            commands::bill::update_bill_field,
            commands::bill::adjust_bill_field,
            commands::bill::reset_bill,
            // Config commands
            commands::config::get_config,
            commands::config::format_amount,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=patungan=trace` - Show trace for patungan crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,patungan=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
