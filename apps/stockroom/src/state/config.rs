//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

use stockroom_core::Money;

/// Env var overriding the database file location.
pub const DB_PATH_ENV: &str = "STOCKROOM_DB_PATH";

/// Env var overriding the currency symbol used for display.
pub const CURRENCY_SYMBOL_ENV: &str = "STOCKROOM_CURRENCY_SYMBOL";

/// File name of the database inside the platform data directory.
pub const DB_FILE_NAME: &str = "stockroom.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Explicit database file; `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            database_path: None,
            currency_symbol: "$".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_DB_PATH`: Use this database file
    /// - `STOCKROOM_CURRENCY_SYMBOL`: Override the currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values are ignored.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = var(DB_PATH_ENV) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = var(CURRENCY_SYMBOL_ENV) {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Resolves where the database file lives.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/dev.stockroom.stockroom/stockroom.db`
    /// - **Windows**: `%APPDATA%\stockroom\stockroom\data\stockroom.db`
    /// - **Linux**: `~/.local/share/stockroom/stockroom.db`
    ///
    /// The data directory is created if missing.
    pub fn resolve_database_path(&self) -> io::Result<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let proj_dirs = ProjectDirs::from("dev", "stockroom", "stockroom").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine app data directory",
            )
        })?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DB_FILE_NAME))
    }

    /// Formats a price for display.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_price(&self, price: Money) -> String {
        if price.is_negative() {
            format!("-{}{}", self.currency_symbol, Money::from_cents(-price.cents()))
        } else {
            format!("{}{}", self.currency_symbol, price)
        }
    }
}
