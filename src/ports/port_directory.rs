//! Port directory port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PortId};
use crate::domain::port::Port;

/// Resolves port ids to port reference entities.
#[async_trait]
pub trait PortDirectory: Send + Sync {
    async fn find_by_id(&self, id: PortId) -> Result<Option<Port>, DomainError>;
}
