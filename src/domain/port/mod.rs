//! Port reference entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PortId;

/// A seaport or airport resolved by identifier only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub id: PortId,
    pub name: String,
}
