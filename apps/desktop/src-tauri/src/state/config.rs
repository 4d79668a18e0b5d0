//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PATUNGAN_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Defaults target the app's home market: Indonesian Rupiah formatted the
/// `id-ID` way (dot-grouped, no decimal places). Everything the frontend
/// needs to render amounts and the quick-tip row comes from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    /// IDR is displayed as whole rupiah, so the default is 0.
    pub currency_decimals: u8,

    /// Thousands separator ("." for id-ID)
    pub thousands_separator: String,

    /// Decimal separator ("," for id-ID; unused while decimals = 0)
    pub decimal_separator: String,

    /// BCP 47 locale tag the formatting mimics
    pub locale: String,

    /// Quick-tip preset percentages shown as one-tap buttons
    pub tip_presets: Vec<u32>,
}

impl Default for ConfigState {
    /// Returns the id-ID / IDR defaults.
    ///
    /// ## Default Values
    /// - Currency: IDR (Rp), whole rupiah only
    /// - Grouping: "28.750" style
    /// - Quick tips: 10, 15, 18, 20 percent
    fn default() -> Self {
        ConfigState {
            currency_code: "IDR".to_string(),
            currency_symbol: "Rp".to_string(),
            currency_decimals: 0,
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            locale: "id-ID".to_string(),
            tip_presets: vec![10, 15, 18, 20],
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PATUNGAN_CURRENCY_CODE`: Override currency code
    /// - `PATUNGAN_CURRENCY_SYMBOL`: Override display symbol
    /// - `PATUNGAN_CURRENCY_DECIMALS`: Override decimal places (e.g. "2")
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(code) = std::env::var("PATUNGAN_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Ok(symbol) = std::env::var("PATUNGAN_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(decimals_str) = std::env::var("PATUNGAN_CURRENCY_DECIMALS") {
            if let Ok(decimals) = decimals_str.parse::<u8>() {
                config.currency_decimals = decimals;
            }
        }

        config
    }

    /// Formats an amount as a currency string.
    ///
    /// This is the ONLY place a computed amount is rounded: the engine keeps
    /// full precision, display rounds half away from zero to the configured
    /// decimal places (whole rupiah by default).
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(28750.0), "Rp 28.750");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        let scale = 10f64.powi(self.currency_decimals as i32);
        // f64::round is half-away-from-zero, same as the display rounding
        // the original UI applied
        let minor_units = (amount * scale).round() as i64;

        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = (minor_units / divisor).abs();
        let frac = (minor_units % divisor).abs();

        let mut out = String::new();
        if minor_units < 0 {
            out.push('-');
        }
        out.push_str(&self.currency_symbol);
        out.push(' ');
        out.push_str(&self.group_thousands(whole));
        if self.currency_decimals > 0 {
            out.push_str(&self.decimal_separator);
            out.push_str(&format!(
                "{:0width$}",
                frac,
                width = self.currency_decimals as usize
            ));
        }
        out
    }

    /// Inserts the thousands separator into a non-negative whole number.
    fn group_thousands(&self, whole: i64) -> String {
        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_idr_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(28750.0), "Rp 28.750");
        assert_eq!(config.format_currency(0.0), "Rp 0");
        assert_eq!(config.format_currency(999.0), "Rp 999");
        assert_eq!(config.format_currency(1000.0), "Rp 1.000");
        assert_eq!(config.format_currency(1234567.0), "Rp 1.234.567");
    }

    #[test]
    fn test_format_currency_rounds_only_at_display() {
        let config = ConfigState::default();
        // 74.1 / 2 people = 37.05 → whole rupiah
        assert_eq!(config.format_currency(37.05), "Rp 37");
        assert_eq!(config.format_currency(36.5), "Rp 37");
        assert_eq!(config.format_currency(28750.4), "Rp 28.750");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(-1234.0), "-Rp 1.234");
    }

    #[test]
    fn test_format_currency_with_decimals() {
        let config = ConfigState {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(1234.5), "$ 1,234.50");
        assert_eq!(config.format_currency(0.005), "$ 0.01");
    }

    #[test]
    fn test_default_tip_presets() {
        let config = ConfigState::default();
        assert_eq!(config.tip_presets, vec![10, 15, 18, 20]);
    }
}
