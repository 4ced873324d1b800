//! Month-over-month trend classification.

use serde::{Deserialize, Serialize};

use super::{ForecastPoint, ForecastSeries};

/// Direction of one month-over-month step.
///
/// There is no flat state: a step is `Rising` only when the next index is
/// strictly greater, and `Falling` otherwise, so equal consecutive indices
/// classify as `Falling`. Kept as-is from the source behavior; see the
/// open-question note in DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
}

/// One adjacent pair of forecast points with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSegment {
    pub from: ForecastPoint,
    pub to: ForecastPoint,
    pub direction: TrendDirection,
    /// Opaque explanation supplied by the summarization collaborator.
    pub reason: String,
}

/// Classifies each adjacent pair of a series.
///
/// A series of length L yields exactly L-1 segments; length <= 1 yields an
/// empty list. The reason text is attached verbatim to every segment.
pub fn classify(series: &ForecastSeries, reason: &str) -> Vec<TrendSegment> {
    series
        .points()
        .windows(2)
        .map(|pair| {
            let (current, next) = (pair[0], pair[1]);
            let direction = if next.freight_cost_index > current.freight_cost_index {
                TrendDirection::Rising
            } else {
                TrendDirection::Falling
            };
            TrendSegment {
                from: current,
                to: next,
                direction,
                reason: reason.to_string(),
            }
        })
        .collect()
}
