//! Schedule store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ScheduleId, YearMonth};
use crate::domain::schedule::Schedule;

/// Read access to sailing schedules.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Resolves one schedule; `None` when unknown.
    async fn find_by_id(&self, id: ScheduleId) -> Result<Option<Schedule>, DomainError>;

    /// All schedules departing in the given calendar month.
    async fn find_by_year_month(&self, month: YearMonth) -> Result<Vec<Schedule>, DomainError>;
}
