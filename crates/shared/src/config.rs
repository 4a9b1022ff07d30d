//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Account defaults.
    #[serde(default)]
    pub account: AccountConfig,
    /// Dashboard configuration.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Account defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    /// ISO 4217 currency code assigned to accounts opened without one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_currency() -> String {
    "BRL".to_string()
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Number of most recent competence periods in the evolution series.
    #[serde(default = "default_evolution_window")]
    pub evolution_window: usize,
}

fn default_evolution_window() -> usize {
    6
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            evolution_window: default_evolution_window(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Reads `config/default.toml` and `config/{RUN_MODE}.toml` when present,
    /// then `SALDO__`-prefixed environment variables (e.g.
    /// `SALDO__ACCOUNT__DEFAULT_CURRENCY`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SALDO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
