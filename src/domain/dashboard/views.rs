//! Read-model views returned by the dashboard handlers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::dashboard::{CongestionLevel, ComparisonMatrix};
use crate::domain::forecast::{ForecastPoint, TrendSegment};
use crate::domain::foundation::{round_display, QuotationId};
use crate::domain::quotation::Quotation;
use crate::domain::schedule::{Schedule, TransportType};
use crate::domain::user::User;

/// One quotation resolved against its schedule and owning forwarder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationView {
    pub quotation_id: QuotationId,
    /// Firm name of the owning forwarder.
    pub forwarder: String,
    pub carrier: String,
    pub transport_type: TransportType,
    pub etd: NaiveDate,
    pub eta: NaiveDate,
    /// Total cost rounded to one fractional digit, half-up.
    pub total_cost: Decimal,
}

impl QuotationView {
    pub fn from_parts(quotation: &Quotation, schedule: &Schedule, forwarder: &User) -> Self {
        Self {
            quotation_id: quotation.id,
            forwarder: forwarder.forwarding.firm_name.clone(),
            carrier: schedule.carrier.clone(),
            transport_type: schedule.transport_type,
            etd: schedule.etd,
            eta: schedule.eta,
            total_cost: round_display(quotation.cost.total_cost),
        }
    }
}

/// Output of the quotation comparison: resolved offers plus the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationComparisonView {
    pub quotations: Vec<QuotationView>,
    pub compare_costs: ComparisonMatrix,
}

/// Forecast chart for a port pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionChartView {
    pub export_port: String,
    pub import_port: String,
    /// Chronologically ascending points of the forward window.
    pub points: Vec<ForecastPoint>,
}

/// Trend classification of the forward window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReasonsView {
    pub segments: Vec<TrendSegment>,
}

/// "Wait N months, save X" recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView {
    /// Calendar months from the anchor month to the cheapest forecast
    /// month; zero when the current month is already cheapest.
    pub months_to_wait: i64,
    /// Anchor-month index minus minimum index; positive means savings.
    pub index_delta: i32,
    /// Cost of the prediction-sheet quotation re-priced at the minimum
    /// index, rounded to one fractional digit.
    pub estimated_cost: Decimal,
    /// Sailings departing in the cheapest month.
    pub candidate_schedules: Vec<Schedule>,
}

/// Import-port congestion summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortCongestionView {
    pub port_name: String,
    pub congestion_percent: u8,
    pub level: CongestionLevel,
    pub description: String,
}

/// Summarized same-day news for the caller's interests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDigestView {
    pub interests: Vec<String>,
    pub summary: String,
}
