//! GetPortCongestionHandler - banded congestion summary of the import port.

use std::sync::Arc;

use crate::domain::dashboard::{CongestionLevel, DashboardError, PortCongestionView};
use crate::domain::foundation::PortId;
use crate::ports::{CongestionProvider, PortDirectory};

/// Query for the import-port congestion summary.
#[derive(Debug, Clone)]
pub struct GetPortCongestionQuery {
    pub import_port_id: PortId,
}

/// Handler banding the provider's congestion percentage.
pub struct GetPortCongestionHandler {
    ports: Arc<dyn PortDirectory>,
    congestion: Arc<dyn CongestionProvider>,
}

impl GetPortCongestionHandler {
    pub fn new(ports: Arc<dyn PortDirectory>, congestion: Arc<dyn CongestionProvider>) -> Self {
        Self { ports, congestion }
    }

    pub async fn handle(
        &self,
        query: GetPortCongestionQuery,
    ) -> Result<PortCongestionView, DashboardError> {
        let port = self
            .ports
            .find_by_id(query.import_port_id)
            .await?
            .ok_or(DashboardError::ImportPortNotFound(query.import_port_id))?;

        let reading = self.congestion.congestion_for(&port).await?;
        let level = CongestionLevel::from_percent(reading.percent)?;

        Ok(PortCongestionView {
            port_name: port.name,
            congestion_percent: reading.percent,
            level,
            description: reading.description,
        })
    }
}
