//! Cheapest-quotation selection.

use thiserror::Error;

use super::Quotation;

/// Failure modes of quotation selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No detail-stage quotation exists for the request.
    #[error("no quotations to select from")]
    Empty,
}

/// Returns the quotation with the smallest total cost.
///
/// Ties keep the first-seen quotation in input order: the comparison is
/// strictly-less, so a later equal-cost offer never displaces an earlier
/// one. Deterministic for a given input ordering.
pub fn select_cheapest(quotations: &[Quotation]) -> Result<&Quotation, SelectionError> {
    let (first, rest) = quotations.split_first().ok_or(SelectionError::Empty)?;
    let mut cheapest = first;
    for quotation in rest {
        if quotation.cost.total_cost < cheapest.cost.total_cost {
            cheapest = quotation;
        }
    }
    Ok(cheapest)
}
