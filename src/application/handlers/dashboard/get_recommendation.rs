//! GetRecommendationHandler - "wait N months, save X" deferred-shipping
//! recommendation.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::dashboard::{DashboardError, RecommendationView};
use crate::domain::forecast::ForecastSeries;
use crate::domain::foundation::{round_display, RequestId, YearMonth};
use crate::domain::quotation::QuotationStatus;
use crate::ports::{ForecastStore, PricingEngine, QuotationStore, ScheduleStore};

/// Query for the deferred-shipping recommendation of one request.
#[derive(Debug, Clone)]
pub struct GetRecommendationQuery {
    pub request_id: RequestId,
    pub today: NaiveDate,
}

/// Handler combining the forecast window minimum, the prediction-sheet
/// quotation, and the pricing engine.
///
/// Four independent lookups feed this path; any miss aborts the whole
/// recommendation. There is no best-effort mode.
pub struct GetRecommendationHandler {
    forecasts: Arc<dyn ForecastStore>,
    quotations: Arc<dyn QuotationStore>,
    pricing: Arc<dyn PricingEngine>,
    schedules: Arc<dyn ScheduleStore>,
    window_months: u32,
}

impl GetRecommendationHandler {
    pub fn new(
        forecasts: Arc<dyn ForecastStore>,
        quotations: Arc<dyn QuotationStore>,
        pricing: Arc<dyn PricingEngine>,
        schedules: Arc<dyn ScheduleStore>,
        window_months: u32,
    ) -> Self {
        Self {
            forecasts,
            quotations,
            pricing,
            schedules,
            window_months,
        }
    }

    pub async fn handle(
        &self,
        query: GetRecommendationQuery,
    ) -> Result<RecommendationView, DashboardError> {
        let anchor = YearMonth::from_date(query.today);
        let window_end = anchor.plus_months(self.window_months);

        let points = self.forecasts.find_within(anchor, window_end).await?;
        let series = ForecastSeries::from_points(points);

        let today_point = self
            .forecasts
            .find_by_month(anchor)
            .await?
            .ok_or(DashboardError::ForecastNotFound(anchor))?;

        let minimum = series
            .minimum()
            .copied()
            .ok_or(DashboardError::ForecastNotFound(anchor))?;

        let months_to_wait = anchor.months_until(minimum.month);
        let index_delta = today_point.freight_cost_index - minimum.freight_cost_index;

        tracing::debug!(
            request_id = %query.request_id,
            minimum_month = %minimum.month,
            months_to_wait,
            index_delta,
            "found forecast minimum"
        );

        let quotation = self
            .quotations
            .find_one_by_request_and_status(query.request_id, QuotationStatus::PredictionSheet)
            .await?
            .ok_or(DashboardError::QuotationNotFound(query.request_id))?;

        let estimated_cost = self
            .pricing
            .recompute(&quotation, minimum.freight_cost_index)
            .await?;

        let candidate_schedules = self.schedules.find_by_year_month(minimum.month).await?;

        Ok(RecommendationView {
            months_to_wait,
            index_delta,
            estimated_cost: round_display(estimated_cost),
            candidate_schedules,
        })
    }
}
