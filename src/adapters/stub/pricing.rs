//! Index-scaled pricing engine adapter.
//!
//! Development stand-in for the external tariff engine: it scales a
//! quotation's total cost by the ratio of the forecast index to a base
//! index. Pure in (quotation, index), so repeated calls agree.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::quotation::Quotation;
use crate::ports::PricingEngine;

#[derive(Debug, Clone)]
pub struct IndexScaledPricingEngine {
    base_index: i32,
}

impl IndexScaledPricingEngine {
    /// `base_index` is the index level the quotation was originally
    /// priced at; it must be positive.
    pub fn new(base_index: i32) -> Result<Self, DomainError> {
        if base_index <= 0 {
            return Err(DomainError::new(
                ErrorCode::PricingFailed,
                format!("base index must be positive, got {}", base_index),
            ));
        }
        Ok(Self { base_index })
    }
}

#[async_trait]
impl PricingEngine for IndexScaledPricingEngine {
    async fn recompute(
        &self,
        quotation: &Quotation,
        forecast_index: i32,
    ) -> Result<Decimal, DomainError> {
        Ok(quotation.cost.total_cost * Decimal::from(forecast_index)
            / Decimal::from(self.base_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{QuotationId, RequestId, ScheduleId, UserId};
    use crate::domain::quotation::{
        ChargeAmounts, ChargeExport, QuotationCost, QuotationStatus,
    };
    use rust_decimal_macros::dec;

    fn quotation(total: Decimal) -> Quotation {
        let line = ChargeAmounts::lcl(dec!(10));
        Quotation {
            id: QuotationId::new(),
            request_id: RequestId::new(),
            status: QuotationStatus::PredictionSheet,
            forwarder_id: UserId::new(1),
            schedule_id: ScheduleId::new(1),
            cost: QuotationCost::new(
                total,
                ChargeExport {
                    terminal_handling: line,
                    handling_fee: line,
                    cfs_charge: line,
                    lift_status: line,
                    customs_clearance_fee: line,
                    trucking: line,
                },
            )
            .unwrap(),
        }
    }

    #[tokio::test]
    async fn scales_total_cost_by_index_ratio() {
        let engine = IndexScaledPricingEngine::new(100).unwrap();
        let cost = engine.recompute(&quotation(dec!(1000.00)), 80).await.unwrap();
        assert_eq!(cost, dec!(800.00));
    }

    #[test]
    fn rejects_non_positive_base_index() {
        assert!(IndexScaledPricingEngine::new(0).is_err());
    }
}
