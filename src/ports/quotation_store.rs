//! Quotation store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RequestId};
use crate::domain::quotation::{Quotation, QuotationStatus};

/// Read access to persisted quotations.
///
/// Misses are expressed as an empty list or `None`; `DomainError` is
/// reserved for infrastructure failures.
#[async_trait]
pub trait QuotationStore: Send + Sync {
    /// All quotations sharing a request key at the given lifecycle stage.
    ///
    /// Order is the store's natural order and is preserved by callers, so
    /// repeated calls on unchanged data return identical lists.
    async fn find_by_request_and_status(
        &self,
        request_id: RequestId,
        status: QuotationStatus,
    ) -> Result<Vec<Quotation>, DomainError>;

    /// The single quotation at a stage that holds at most one per request
    /// (e.g. the prediction sheet).
    async fn find_one_by_request_and_status(
        &self,
        request_id: RequestId,
        status: QuotationStatus,
    ) -> Result<Option<Quotation>, DomainError>;
}
