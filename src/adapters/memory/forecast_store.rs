//! In-memory forecast store adapter.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::forecast::ForecastPoint;
use crate::domain::foundation::{DomainError, YearMonth};
use crate::ports::ForecastStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryForecastStore {
    points: Arc<RwLock<Vec<ForecastPoint>>>,
}

impl InMemoryForecastStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, point: ForecastPoint) {
        self.points.write().await.push(point);
    }
}

#[async_trait]
impl ForecastStore for InMemoryForecastStore {
    async fn find_within(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> Result<Vec<ForecastPoint>, DomainError> {
        let points = self.points.read().await;
        Ok(points
            .iter()
            .filter(|p| p.month >= from && p.month <= to)
            .copied()
            .collect())
    }

    async fn find_by_month(
        &self,
        month: YearMonth,
    ) -> Result<Option<ForecastPoint>, DomainError> {
        let points = self.points.read().await;
        Ok(points.iter().find(|p| p.month == month).copied())
    }
}
