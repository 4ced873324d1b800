//! User and forwarding-firm reference entities.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// The forwarding firm a user belongs to. The firm name is the row key of
/// the comparison matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forwarding {
    pub firm_name: String,
}

/// A forwarder account with its owning firm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub forwarding: Forwarding,
}
