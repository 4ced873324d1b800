//! Application configuration.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `CARGOLINK` prefix
//! with `__` separating nested values, e.g.
//! `CARGOLINK__DASHBOARD__FORECAST_WINDOW_MONTHS=6`.

mod dashboard;
mod error;
mod telemetry;

pub use dashboard::DashboardConfig;
pub use error::{ConfigError, ConfigValidationError};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Loads configuration from the environment, reading `.env` first
    /// when present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CARGOLINK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of loaded values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.dashboard.validate()
    }
}
