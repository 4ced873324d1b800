//! CompareQuotationsHandler - side-by-side view of competing offers.

use std::sync::Arc;

use crate::domain::dashboard::{
    ComparisonMatrix, DashboardError, QuotationComparisonView, QuotationView,
};
use crate::domain::foundation::RequestId;
use crate::domain::quotation::{ChargeExport, QuotationStatus};
use crate::ports::{ForwarderDirectory, QuotationStore, ScheduleStore};

/// Query for the full comparison of one request's detail-stage offers.
#[derive(Debug, Clone)]
pub struct CompareQuotationsQuery {
    pub request_id: RequestId,
}

/// Handler producing per-offer views and the per-category cost matrix.
pub struct CompareQuotationsHandler {
    quotations: Arc<dyn QuotationStore>,
    schedules: Arc<dyn ScheduleStore>,
    forwarders: Arc<dyn ForwarderDirectory>,
}

impl CompareQuotationsHandler {
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
        query: CompareQuotationsQuery,
    ) -> Result<QuotationComparisonView, DashboardError> {
        let quotations = self
            .quotations
            .find_by_request_and_status(query.request_id, QuotationStatus::DetailInfo)
            .await?;

        let mut views = Vec::with_capacity(quotations.len());
        let mut matrix_rows: Vec<(String, ChargeExport)> = Vec::with_capacity(quotations.len());

        // Store order is kept throughout, so the view list and every matrix
        // row share one forwarder ordering.
        for quotation in &quotations {
            let schedule = self
                .schedules
                .find_by_id(quotation.schedule_id)
                .await?
                .ok_or(DashboardError::ScheduleNotFound(quotation.schedule_id))?;

            let forwarder = self
                .forwarders
                .find_by_id(quotation.forwarder_id)
                .await?
                .ok_or(DashboardError::ForwarderNotFound(quotation.forwarder_id))?;

            views.push(QuotationView::from_parts(quotation, &schedule, &forwarder));
            matrix_rows.push((
                forwarder.forwarding.firm_name,
                quotation.cost.charge_export,
            ));
        }

        let compare_costs = ComparisonMatrix::build(&matrix_rows)?;

        Ok(QuotationComparisonView {
            quotations: views,
            compare_costs,
        })
    }
}
