//! Freight-cost-index forecasts: series container and trend classifier.

mod series;
mod trend;

pub use series::{ForecastPoint, ForecastSeries};
pub use trend::{classify, TrendDirection, TrendSegment};
