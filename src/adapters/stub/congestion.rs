//! Fixed-response congestion provider adapter.

use async_trait::async_trait;

use crate::domain::dashboard::CongestionReading;
use crate::domain::foundation::DomainError;
use crate::domain::port::Port;
use crate::ports::CongestionProvider;

#[derive(Debug, Clone)]
pub struct FixedCongestionProvider {
    reading: CongestionReading,
}

impl FixedCongestionProvider {
    pub fn new(reading: CongestionReading) -> Self {
        Self { reading }
    }
}

impl Default for FixedCongestionProvider {
    fn default() -> Self {
        Self::new(CongestionReading {
            percent: 33,
            description: "A large share of container vessels is holding at the port; \
                          berthing waits and cargo work delays are possible."
                .to_string(),
        })
    }
}

#[async_trait]
impl CongestionProvider for FixedCongestionProvider {
    async fn congestion_for(&self, _port: &Port) -> Result<CongestionReading, DomainError> {
        Ok(self.reading.clone())
    }
}
