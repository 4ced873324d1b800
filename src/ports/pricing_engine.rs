//! Pricing engine port.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::foundation::DomainError;
use crate::domain::quotation::Quotation;

/// The external pricing engine that owns all tariff and markup logic.
///
/// The dashboard treats it as an opaque pure function of (quotation,
/// forecast index): repeating a call with the same inputs yields the same
/// total cost. Failures should carry [`crate::domain::foundation::ErrorCode::PricingFailed`].
#[async_trait]
pub trait PricingEngine: Send + Sync {
    /// Re-prices a quotation as if shipped at the given forecast index.
    async fn recompute(
        &self,
        quotation: &Quotation,
        forecast_index: i32,
    ) -> Result<Decimal, DomainError>;
}
