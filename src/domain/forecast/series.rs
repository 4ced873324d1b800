//! Ordered series of monthly freight-cost-index forecasts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::YearMonth;

/// One monthly forecast of the freight cost index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub month: YearMonth,
    pub freight_cost_index: i32,
}

impl ForecastPoint {
    pub fn new(month: YearMonth, freight_cost_index: i32) -> Self {
        Self {
            month,
            freight_cost_index,
        }
    }
}

/// Chronologically ascending forecast points, at most one per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    /// Builds a series from unordered store output.
    ///
    /// Duplicate months keep the first point encountered, mirroring the
    /// store's documented merge policy; the result is sorted ascending.
    pub fn from_points(points: Vec<ForecastPoint>) -> Self {
        let mut by_month: BTreeMap<YearMonth, ForecastPoint> = BTreeMap::new();
        for point in points {
            by_month.entry(point.month).or_insert(point);
        }
        Self {
            points: by_month.into_values().collect(),
        }
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point with the lowest index; the earliest month wins ties.
    pub fn minimum(&self) -> Option<&ForecastPoint> {
        let (first, rest) = self.points.split_first()?;
        let mut min = first;
        for point in rest {
            if point.freight_cost_index < min.freight_cost_index {
                min = point;
            }
        }
        Some(min)
    }

    /// Sub-series inside `[from, to]`, both endpoints inclusive.
    pub fn window(&self, from: YearMonth, to: YearMonth) -> ForecastSeries {
        ForecastSeries {
            points: self
                .points
                .iter()
                .filter(|p| p.month >= from && p.month <= to)
                .copied()
                .collect(),
        }
    }
}
