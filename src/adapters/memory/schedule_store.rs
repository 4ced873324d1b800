//! In-memory schedule store adapter.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ScheduleId, YearMonth};
use crate::domain::schedule::Schedule;
use crate::ports::ScheduleStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduleStore {
    schedules: Arc<RwLock<Vec<Schedule>>>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, schedule: Schedule) {
        self.schedules.write().await.push(schedule);
    }
}

#[async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn find_by_id(&self, id: ScheduleId) -> Result<Option<Schedule>, DomainError> {
        let schedules = self.schedules.read().await;
        Ok(schedules.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_year_month(&self, month: YearMonth) -> Result<Vec<Schedule>, DomainError> {
        let schedules = self.schedules.read().await;
        Ok(schedules
            .iter()
            .filter(|s| s.departure_month() == month)
            .cloned()
            .collect())
    }
}
