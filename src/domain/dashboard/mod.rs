//! Dashboard read models: comparison matrix, congestion banding, views,
//! and the query-side error enum.

mod comparison;
mod congestion;
mod errors;
mod views;

pub use comparison::{CategoryComparison, ComparisonMatrix, ForwarderCharge};
pub use congestion::{CongestionLevel, CongestionReading};
pub use errors::DashboardError;
pub use views::{
    NewsDigestView, PortCongestionView, PredictionChartView, PredictionReasonsView,
    QuotationComparisonView, QuotationView, RecommendationView,
};
