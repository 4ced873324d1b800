//! Per-charge-category comparison matrix.
//!
//! The source system kept six parallel per-category lists; here the matrix
//! is one ordered table keyed by (category, forwarder) so rows cannot fall
//! out of alignment.

use serde::Serialize;

use crate::domain::foundation::{round_units, ValidationError};
use crate::domain::quotation::{ChargeCategory, ChargeExport};

/// One forwarder's rounded cost for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwarderCharge {
    pub firm_name: String,
    /// LCL amount rounded half-up to whole currency units.
    pub cost: i64,
}

/// All forwarders' costs for one category, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryComparison {
    pub category: ChargeCategory,
    /// Wire label, e.g. `thcCost`.
    pub label: &'static str,
    pub charges: Vec<ForwarderCharge>,
}

/// The full comparison matrix: six categories in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComparisonMatrix {
    pub categories: Vec<CategoryComparison>,
}

impl ComparisonMatrix {
    /// Builds the matrix from resolved (firm name, charge breakdown) rows.
    ///
    /// Row order within each category follows the input order of the
    /// quotation set; no cross-forwarder sort is applied, so repeated calls
    /// on the same input produce identical output.
    pub fn build(rows: &[(String, ChargeExport)]) -> Result<Self, ValidationError> {
        let mut categories = Vec::with_capacity(ChargeCategory::ALL.len());
        for category in ChargeCategory::ALL {
            let mut charges = Vec::with_capacity(rows.len());
            for (firm_name, charge_export) in rows {
                charges.push(ForwarderCharge {
                    firm_name: firm_name.clone(),
                    cost: round_units(charge_export.amounts(category).lcl)?,
                });
            }
            categories.push(CategoryComparison {
                category,
                label: category.label(),
                charges,
            });
        }
        Ok(Self { categories })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quotation::ChargeAmounts;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn charges(base: Decimal) -> ChargeExport {
        ChargeExport {
            terminal_handling: ChargeAmounts::lcl(base),
            handling_fee: ChargeAmounts::lcl(base + dec!(1)),
            cfs_charge: ChargeAmounts::lcl(base + dec!(2)),
            lift_status: ChargeAmounts::lcl(base + dec!(3)),
            customs_clearance_fee: ChargeAmounts::lcl(base + dec!(4)),
            trucking: ChargeAmounts::lcl(base + dec!(5)),
        }
    }

    #[test]
    fn categories_come_out_in_canonical_order() {
        let matrix = ComparisonMatrix::build(&[("Oceanic".to_string(), charges(dec!(10)))]).unwrap();
        let labels: Vec<&str> = matrix.categories.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec![
                "thcCost",
                "handlingCost",
                "cfsCost",
                "liftStatusCost",
                "customsClearanceCost",
                "truckingCost"
            ]
        );
    }

    #[test]
    fn rows_preserve_input_order() {
        let matrix = ComparisonMatrix::build(&[
            ("Zenith".to_string(), charges(dec!(10))),
            ("Apex".to_string(), charges(dec!(20))),
        ])
        .unwrap();
        let firms: Vec<&str> = matrix.categories[0]
            .charges
            .iter()
            .map(|c| c.firm_name.as_str())
            .collect();
        assert_eq!(firms, vec!["Zenith", "Apex"]);
    }

    #[test]
    fn amounts_round_half_up_to_units() {
        let matrix =
            ComparisonMatrix::build(&[("Oceanic".to_string(), charges(dec!(99.5)))]).unwrap();
        // terminal_handling = 99.5 -> 100
        assert_eq!(matrix.categories[0].charges[0].cost, 100);
        // handling_fee = 100.5 -> 101
        assert_eq!(matrix.categories[1].charges[0].cost, 101);
    }

    #[test]
    fn building_twice_yields_identical_output() {
        let rows = vec![
            ("Zenith".to_string(), charges(dec!(12.49))),
            ("Apex".to_string(), charges(dec!(7.51))),
        ];
        let first = serde_json::to_string(&ComparisonMatrix::build(&rows).unwrap()).unwrap();
        let second = serde_json::to_string(&ComparisonMatrix::build(&rows).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_quotation_set_yields_empty_rows() {
        let matrix = ComparisonMatrix::build(&[]).unwrap();
        assert_eq!(matrix.categories.len(), 6);
        assert!(matrix.categories.iter().all(|c| c.charges.is_empty()));
    }
}
