//! Import-port congestion banding.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Congestion band derived from the provider's percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    /// 0-20%: vessels berth without waiting.
    Smooth,
    /// 21-60%: normal terminal load.
    Normal,
    /// 61-100%: berthing and cargo work delays are likely.
    Congested,
}

impl CongestionLevel {
    /// Bands a congestion percentage; values above 100 violate the
    /// provider contract.
    pub fn from_percent(percent: u8) -> Result<Self, ValidationError> {
        match percent {
            0..=20 => Ok(CongestionLevel::Smooth),
            21..=60 => Ok(CongestionLevel::Normal),
            61..=100 => Ok(CongestionLevel::Congested),
            _ => Err(ValidationError::out_of_range(
                "congestion_percent",
                0,
                100,
                percent as i64,
            )),
        }
    }
}

/// Raw reading from the congestion provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CongestionReading {
    pub percent: u8,
    pub description: String,
}
