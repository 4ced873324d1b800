//! Forecast store port.

use async_trait::async_trait;

use crate::domain::forecast::ForecastPoint;
use crate::domain::foundation::{DomainError, YearMonth};

/// Read access to monthly freight-cost-index predictions.
#[async_trait]
pub trait ForecastStore: Send + Sync {
    /// All points inside `[from, to]`, both endpoints inclusive.
    ///
    /// The store makes no order or uniqueness guarantee; callers build a
    /// [`crate::domain::forecast::ForecastSeries`] from the result.
    async fn find_within(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> Result<Vec<ForecastPoint>, DomainError>;

    /// The point for one calendar month, if predicted.
    async fn find_by_month(&self, month: YearMonth)
        -> Result<Option<ForecastPoint>, DomainError>;
}
