//! GetCheapestQuotationHandler - picks the lowest-cost detail-stage offer.

use std::sync::Arc;

use crate::domain::dashboard::{DashboardError, QuotationView};
use crate::domain::quotation::{select_cheapest, QuotationStatus};
use crate::ports::{ForwarderDirectory, QuotationStore, ScheduleStore};

/// Query for the cheapest competing quotation of one shipment request.
#[derive(Debug, Clone)]
pub struct GetCheapestQuotationQuery {
    pub request_id: crate::domain::foundation::RequestId,
}

/// Handler resolving the cheapest offer to its schedule and forwarder.
pub struct GetCheapestQuotationHandler {
    quotations: Arc<dyn QuotationStore>,
    schedules: Arc<dyn ScheduleStore>,
    forwarders: Arc<dyn ForwarderDirectory>,
}

impl GetCheapestQuotationHandler {
    pub fn new(
        quotations: Arc<dyn QuotationStore>,
        schedules: Arc<dyn ScheduleStore>,
        forwarders: Arc<dyn ForwarderDirectory>,
    ) -> Self {
        Self {
            quotations,
            schedules,
            forwarders,
        }
    }

    pub async fn handle(
        &self,
        query: GetCheapestQuotationQuery,
    ) -> Result<QuotationView, DashboardError> {
        let quotations = self
            .quotations
            .find_by_request_and_status(query.request_id, QuotationStatus::DetailInfo)
            .await?;

        // An empty detail-stage set means no forwarder has priced the
        // request yet; ties keep the first offer in store order.
        let cheapest = select_cheapest(&quotations)
            .map_err(|_| DashboardError::QuotationNotFound(query.request_id))?;

        tracing::debug!(
            request_id = %query.request_id,
            quotation_id = %cheapest.id,
            candidates = quotations.len(),
            "selected cheapest quotation"
        );

        let schedule = self
            .schedules
            .find_by_id(cheapest.schedule_id)
            .await?
            .ok_or(DashboardError::ScheduleNotFound(cheapest.schedule_id))?;

        let forwarder = self
            .forwarders
            .find_by_id(cheapest.forwarder_id)
            .await?
            .ok_or(DashboardError::ForwarderNotFound(cheapest.forwarder_id))?;

        Ok(QuotationView::from_parts(cheapest, &schedule, &forwarder))
    }
}
