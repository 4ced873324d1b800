//! Dashboard query handlers.
//!
//! One query + handler pair per dashboard operation. Handlers orchestrate
//! ports and domain functions; every time anchor comes in on the query.

mod compare_quotations;
mod get_cheapest_quotation;
mod get_news_digest;
mod get_port_congestion;
mod get_prediction_chart;
mod get_prediction_reasons;
mod get_recommendation;

#[cfg(test)]
pub(crate) mod test_support;

pub use compare_quotations::{CompareQuotationsHandler, CompareQuotationsQuery};
pub use get_cheapest_quotation::{GetCheapestQuotationHandler, GetCheapestQuotationQuery};
pub use get_news_digest::{GetNewsDigestHandler, GetNewsDigestQuery};
pub use get_port_congestion::{GetPortCongestionHandler, GetPortCongestionQuery};
pub use get_prediction_chart::{GetPredictionChartHandler, GetPredictionChartQuery};
pub use get_prediction_reasons::{GetPredictionReasonsHandler, GetPredictionReasonsQuery};
pub use get_recommendation::{GetRecommendationHandler, GetRecommendationQuery};
