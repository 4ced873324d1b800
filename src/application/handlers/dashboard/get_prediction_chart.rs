//! GetPredictionChartHandler - forward freight-cost-index window for a
//! port pair.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::dashboard::{DashboardError, PredictionChartView};
use crate::domain::forecast::ForecastSeries;
use crate::domain::foundation::{PortId, YearMonth};
use crate::ports::{ForecastStore, PortDirectory};

/// Query for the forecast chart between two ports.
///
/// `today` anchors the window and is always supplied by the caller; the
/// handler never samples the clock.
#[derive(Debug, Clone)]
pub struct GetPredictionChartQuery {
    pub export_port_id: PortId,
    pub import_port_id: PortId,
    pub today: NaiveDate,
}

/// Handler assembling the windowed forecast series with port names.
pub struct GetPredictionChartHandler {
    forecasts: Arc<dyn ForecastStore>,
    ports: Arc<dyn PortDirectory>,
    window_months: u32,
}

impl GetPredictionChartHandler {
    pub fn new(
        forecasts: Arc<dyn ForecastStore>,
        ports: Arc<dyn PortDirectory>,
        window_months: u32,
    ) -> Self {
        Self {
            forecasts,
            ports,
            window_months,
        }
    }

    pub async fn handle(
        &self,
        query: GetPredictionChartQuery,
    ) -> Result<PredictionChartView, DashboardError> {
        let from = YearMonth::from_date(query.today);
        let to = from.plus_months(self.window_months);

        let points = self.forecasts.find_within(from, to).await?;
        let series = ForecastSeries::from_points(points);

        let export_port = self
            .ports
            .find_by_id(query.export_port_id)
            .await?
            .ok_or(DashboardError::ExportPortNotFound(query.export_port_id))?;
        let import_port = self
            .ports
            .find_by_id(query.import_port_id)
            .await?
            .ok_or(DashboardError::ImportPortNotFound(query.import_port_id))?;

        Ok(PredictionChartView {
            export_port: export_port.name,
            import_port: import_port.name,
            points: series.points().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::dashboard::test_support::{
        ym, MockForecastStore, MockPortDirectory,
    };
    use crate::domain::forecast::ForecastPoint;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[tokio::test]
    async fn returns_window_sorted_with_port_names() {
        let handler = GetPredictionChartHandler::new(
            Arc::new(MockForecastStore::with_points(vec![
                ForecastPoint::new(ym(2025, 3), 95),
                ForecastPoint::new(ym(2025, 1), 100),
                ForecastPoint::new(ym(2025, 7), 88),
                // outside the six-month window
                ForecastPoint::new(ym(2025, 9), 70),
            ])),
            Arc::new(MockPortDirectory::with_ports(&[
                (1, "Busan"),
                (2, "Rotterdam"),
            ])),
            6,
        );

        let view = handler
            .handle(GetPredictionChartQuery {
                export_port_id: PortId::new(1),
                import_port_id: PortId::new(2),
                today: today(),
            })
            .await
            .unwrap();

        assert_eq!(view.export_port, "Busan");
        assert_eq!(view.import_port, "Rotterdam");
        let months: Vec<YearMonth> = view.points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![ym(2025, 1), ym(2025, 3), ym(2025, 7)]);
    }

    #[tokio::test]
    async fn duplicate_store_rows_keep_the_first_point() {
        let handler = GetPredictionChartHandler::new(
            Arc::new(MockForecastStore::with_points(vec![
                ForecastPoint::new(ym(2025, 2), 90),
                ForecastPoint::new(ym(2025, 2), 500),
            ])),
            Arc::new(MockPortDirectory::with_ports(&[(1, "Busan"), (2, "Kobe")])),
            6,
        );

        let view = handler
            .handle(GetPredictionChartQuery {
                export_port_id: PortId::new(1),
                import_port_id: PortId::new(2),
                today: today(),
            })
            .await
            .unwrap();
        assert_eq!(view.points.len(), 1);
        assert_eq!(view.points[0].freight_cost_index, 90);
    }

    #[tokio::test]
    async fn unknown_export_port_fails_before_import_port() {
        let handler = GetPredictionChartHandler::new(
            Arc::new(MockForecastStore::with_points(vec![])),
            Arc::new(MockPortDirectory::with_ports(&[])),
            6,
        );

        let result = handler
            .handle(GetPredictionChartQuery {
                export_port_id: PortId::new(8),
                import_port_id: PortId::new(9),
                today: today(),
            })
            .await;
        assert!(matches!(
            result,
            Err(DashboardError::ExportPortNotFound(id)) if id == PortId::new(8)
        ));
    }
}
