//! # Config Commands
//!
//! Tauri commands for configuration and display formatting.

use tauri::State;
use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (currency symbol, quick-tip presets for the UI)
///
/// ## Returns
/// Complete configuration state (read-only)
#[tauri::command]
pub fn get_config(config: State<'_, ConfigState>) -> ConfigState {
    debug!("get_config command");
    (*config).clone()
}

/// Formats an amount as a locale-style integer currency string.
///
/// The core engine only ever supplies raw numbers; this is the display
/// boundary where rounding happens (`28750.4` → `"Rp 28.750"`).
#[tauri::command]
pub fn format_amount(config: State<'_, ConfigState>, amount: f64) -> String {
    debug!(amount = %amount, "format_amount command");
    config.format_currency(amount)
}
