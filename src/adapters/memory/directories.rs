//! In-memory forwarder and port directory adapters.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, PortId, UserId};
use crate::domain::port::Port;
use crate::domain::user::User;
use crate::ports::{ForwarderDirectory, PortDirectory};

#[derive(Debug, Clone, Default)]
pub struct InMemoryForwarderDirectory {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryForwarderDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl ForwarderDirectory for InMemoryForwarderDirectory {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPortDirectory {
    ports: Arc<RwLock<HashMap<PortId, Port>>>,
}

impl InMemoryPortDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, port: Port) {
        self.ports.write().await.insert(port.id, port);
    }
}

#[async_trait]
impl PortDirectory for InMemoryPortDirectory {
    async fn find_by_id(&self, id: PortId) -> Result<Option<Port>, DomainError> {
        Ok(self.ports.read().await.get(&id).cloned())
    }
}
