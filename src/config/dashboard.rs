//! Dashboard configuration section.

use serde::Deserialize;

use super::ConfigValidationError;

const MIN_WINDOW_MONTHS: u32 = 1;
const MAX_WINDOW_MONTHS: u32 = 24;

/// Tuning knobs of the dashboard engine.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Length of the forward forecast window, in calendar months.
    #[serde(default = "default_forecast_window_months")]
    pub forecast_window_months: u32,
}

fn default_forecast_window_months() -> u32 {
    6
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            forecast_window_months: default_forecast_window_months(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(MIN_WINDOW_MONTHS..=MAX_WINDOW_MONTHS).contains(&self.forecast_window_months) {
            return Err(ConfigValidationError::ForecastWindowOutOfRange {
                min: MIN_WINDOW_MONTHS,
                max: MAX_WINDOW_MONTHS,
                actual: self.forecast_window_months,
            });
        }
        Ok(())
    }
}
