//! GetPredictionReasonsHandler - month-over-month trend classification of
//! the forward forecast window.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::dashboard::{DashboardError, PredictionReasonsView};
use crate::domain::forecast::{classify, ForecastSeries};
use crate::domain::foundation::YearMonth;
use crate::ports::{ForecastStore, SummarizationService};

/// Query for the classified trend segments of the forward window.
#[derive(Debug, Clone)]
pub struct GetPredictionReasonsQuery {
    pub today: NaiveDate,
}

/// Handler pairing trend segments with a collaborator-supplied reason.
pub struct GetPredictionReasonsHandler {
    forecasts: Arc<dyn ForecastStore>,
    summarizer: Arc<dyn SummarizationService>,
    window_months: u32,
}

impl GetPredictionReasonsHandler {
    pub fn new(
        forecasts: Arc<dyn ForecastStore>,
        summarizer: Arc<dyn SummarizationService>,
        window_months: u32,
    ) -> Self {
        Self {
            forecasts,
            summarizer,
            window_months,
        }
    }

    pub async fn handle(
        &self,
        query: GetPredictionReasonsQuery,
    ) -> Result<PredictionReasonsView, DashboardError> {
        let from = YearMonth::from_date(query.today);
        let to = from.plus_months(self.window_months);

        let points = self.forecasts.find_within(from, to).await?;
        let series = ForecastSeries::from_points(points);

        // The reason text is opaque here; the classifier attaches it
        // verbatim to every segment.
        let descriptions: Vec<String> = series
            .points()
            .iter()
            .map(|p| format!("{}: {}", p.month, p.freight_cost_index))
            .collect();
        let reason = self.summarizer.summarize(&descriptions).await?;

        Ok(PredictionReasonsView {
            segments: classify(&series, &reason),
        })
    }
}
