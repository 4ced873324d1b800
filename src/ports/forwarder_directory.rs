//! Forwarder directory port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Resolves forwarder user ids to accounts with their forwarding firm.
#[async_trait]
pub trait ForwarderDirectory: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarder_directory_is_object_safe() {
        fn _accepts_dyn(_directory: &dyn ForwarderDirectory) {}
    }
}
