//! Quotation entity and cost breakdown.
//!
//! A quotation is one forwarder's priced offer for a shipment request.
//! Competing offers share a [`RequestId`]; lifecycle stage is tracked by
//! [`QuotationStatus`].

mod selection;

pub use selection::{select_cheapest, SelectionError};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuotationId, RequestId, ScheduleId, UserId, ValidationError};

/// Lifecycle stage of a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotationStatus {
    /// Freshly submitted shipment request, not yet priced.
    Raw,
    /// Basic information captured.
    BasicInfo,
    /// Fully priced forwarder offer; the only stage eligible for comparison.
    DetailInfo,
    /// Algorithm-generated sheet used as the recommendation re-pricing base.
    PredictionSheet,
}

/// Per-container-load-type amounts of one charge line.
///
/// Comparison is done on the LCL amount; FCL variants exist in the source
/// documents but are not part of the comparison basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeAmounts {
    pub lcl: Decimal,
}

impl ChargeAmounts {
    pub fn lcl(amount: Decimal) -> Self {
        Self { lcl: amount }
    }
}

/// The fixed export-side charge lines of a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeExport {
    pub terminal_handling: ChargeAmounts,
    pub handling_fee: ChargeAmounts,
    pub cfs_charge: ChargeAmounts,
    pub lift_status: ChargeAmounts,
    pub customs_clearance_fee: ChargeAmounts,
    pub trucking: ChargeAmounts,
}

impl ChargeExport {
    /// The charge line for one category.
    pub fn amounts(&self, category: ChargeCategory) -> &ChargeAmounts {
        match category {
            ChargeCategory::TerminalHandling => &self.terminal_handling,
            ChargeCategory::HandlingFee => &self.handling_fee,
            ChargeCategory::CfsCharge => &self.cfs_charge,
            ChargeCategory::LiftStatus => &self.lift_status,
            ChargeCategory::CustomsClearance => &self.customs_clearance_fee,
            ChargeCategory::Trucking => &self.trucking,
        }
    }
}

/// Named charge categories of the comparison matrix, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChargeCategory {
    TerminalHandling,
    HandlingFee,
    CfsCharge,
    LiftStatus,
    CustomsClearance,
    Trucking,
}

impl ChargeCategory {
    /// Canonical ordering of the matrix rows.
    pub const ALL: [ChargeCategory; 6] = [
        ChargeCategory::TerminalHandling,
        ChargeCategory::HandlingFee,
        ChargeCategory::CfsCharge,
        ChargeCategory::LiftStatus,
        ChargeCategory::CustomsClearance,
        ChargeCategory::Trucking,
    ];

    /// Stable wire label used as the matrix key.
    pub fn label(&self) -> &'static str {
        match self {
            ChargeCategory::TerminalHandling => "thcCost",
            ChargeCategory::HandlingFee => "handlingCost",
            ChargeCategory::CfsCharge => "cfsCost",
            ChargeCategory::LiftStatus => "liftStatusCost",
            ChargeCategory::CustomsClearance => "customsClearanceCost",
            ChargeCategory::Trucking => "truckingCost",
        }
    }
}

/// Total cost plus the export charge breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationCost {
    pub total_cost: Decimal,
    pub charge_export: ChargeExport,
}

impl QuotationCost {
    /// Builds a cost breakdown, rejecting negative totals.
    pub fn new(total_cost: Decimal, charge_export: ChargeExport) -> Result<Self, ValidationError> {
        if total_cost.is_sign_negative() {
            return Err(ValidationError::invalid_format(
                "total_cost",
                "must be non-negative",
            ));
        }
        Ok(Self {
            total_cost,
            charge_export,
        })
    }
}

/// One forwarder's priced offer for a shipment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    pub id: QuotationId,
    /// Shared key of the logical shipment request this offer competes on.
    pub request_id: RequestId,
    pub status: QuotationStatus,
    /// User id of the forwarder that owns this offer.
    pub forwarder_id: UserId,
    /// The sailing schedule this offer prices.
    pub schedule_id: ScheduleId,
    pub cost: QuotationCost,
}
