//! Port congestion provider port.

use async_trait::async_trait;

use crate::domain::dashboard::CongestionReading;
use crate::domain::foundation::DomainError;
use crate::domain::port::Port;

/// Supplies the current congestion reading for a port.
///
/// How the reading is obtained (terminal APIs, AIS data) is out of scope;
/// the stub adapter returns a fixed reading.
#[async_trait]
pub trait CongestionProvider: Send + Sync {
    async fn congestion_for(&self, port: &Port) -> Result<CongestionReading, DomainError>;
}
