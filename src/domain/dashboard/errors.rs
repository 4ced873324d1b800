//! Dashboard query errors.

use crate::domain::foundation::{
    DomainError, ErrorCode, PortId, RequestId, ScheduleId, UserId, ValidationError, YearMonth,
};

/// Errors surfaced by the dashboard query handlers.
///
/// Every required lookup miss is a distinct variant; nothing is silently
/// defaulted and no partial result is produced.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardError {
    #[error("No quotation found for request {0}")]
    QuotationNotFound(RequestId),

    #[error("Schedule not found: {0}")]
    ScheduleNotFound(ScheduleId),

    #[error("Forwarder not found: {0}")]
    ForwarderNotFound(UserId),

    #[error("Export port not found: {0}")]
    ExportPortNotFound(PortId),

    #[error("Import port not found: {0}")]
    ImportPortNotFound(PortId),

    #[error("No freight cost forecast for {0}")]
    ForecastNotFound(YearMonth),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Pricing engine failed: {0}")]
    Pricing(String),

    #[error("Store failure: {0}")]
    Store(String),
}

impl DashboardError {
    /// Stable code for the HTTP layer's error envelope.
    pub fn code(&self) -> ErrorCode {
        match self {
            DashboardError::QuotationNotFound(_) => ErrorCode::QuotationNotFound,
            DashboardError::ScheduleNotFound(_) => ErrorCode::ScheduleNotFound,
            DashboardError::ForwarderNotFound(_) => ErrorCode::UserNotFound,
            DashboardError::ExportPortNotFound(_) => ErrorCode::ExportPortNotFound,
            DashboardError::ImportPortNotFound(_) => ErrorCode::ImportPortNotFound,
            DashboardError::ForecastNotFound(_) => ErrorCode::PredictionNotFound,
            DashboardError::Validation(_) => ErrorCode::ValidationFailed,
            DashboardError::Pricing(_) => ErrorCode::PricingFailed,
            DashboardError::Store(_) => ErrorCode::StoreFailed,
        }
    }
}

impl From<DomainError> for DashboardError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::PricingFailed => DashboardError::Pricing(err.message),
            _ => DashboardError::Store(err.to_string()),
        }
    }
}

impl From<ValidationError> for DashboardError {
    fn from(err: ValidationError) -> Self {
        DashboardError::Validation(err.to_string())
    }
}
