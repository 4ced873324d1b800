//! In-memory quotation store adapter.
//!
//! Backs integration tests and development wiring; insertion order is the
//! store's natural order.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, RequestId};
use crate::domain::quotation::{Quotation, QuotationStatus};
use crate::ports::QuotationStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryQuotationStore {
    quotations: Arc<RwLock<Vec<Quotation>>>,
}

impl InMemoryQuotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, quotation: Quotation) {
        self.quotations.write().await.push(quotation);
    }

    pub async fn clear(&self) {
        self.quotations.write().await.clear();
    }
}

#[async_trait]
impl QuotationStore for InMemoryQuotationStore {
    async fn find_by_request_and_status(
        &self,
        request_id: RequestId,
        status: QuotationStatus,
    ) -> Result<Vec<Quotation>, DomainError> {
        let quotations = self.quotations.read().await;
        Ok(quotations
            .iter()
            .filter(|q| q.request_id == request_id && q.status == status)
            .cloned()
            .collect())
    }

    async fn find_one_by_request_and_status(
        &self,
        request_id: RequestId,
        status: QuotationStatus,
    ) -> Result<Option<Quotation>, DomainError> {
        let quotations = self.quotations.read().await;
        Ok(quotations
            .iter()
            .find(|q| q.request_id == request_id && q.status == status)
            .cloned())
    }
}
