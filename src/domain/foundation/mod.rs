//! Shared value objects for the freight dashboard domain.

mod errors;
mod ids;
mod money;
mod year_month;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PortId, QuotationId, RequestId, ScheduleId, UserId};
pub use money::{round_display, round_units};
pub use year_month::YearMonth;
