//! Sailing schedule reference entity.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PortId, ScheduleId, YearMonth};

/// Mode of carriage for a sailing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Sea,
    Air,
}

/// A sailing record referenced by quotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: ScheduleId,
    pub carrier: String,
    pub transport_type: TransportType,
    /// Estimated time of departure.
    pub etd: NaiveDate,
    /// Estimated time of arrival.
    pub eta: NaiveDate,
    pub export_port_id: PortId,
    pub import_port_id: PortId,
    /// Remaining bookable volume in cubic meters.
    pub cbm_capacity: Decimal,
}

impl Schedule {
    /// The calendar month this sailing departs in; recommendation
    /// candidates are matched on it.
    pub fn departure_month(&self) -> YearMonth {
        YearMonth::from_date(self.etd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn departure_month_comes_from_etd() {
        let schedule = Schedule {
            id: ScheduleId::new(1),
            carrier: "HMM".to_string(),
            transport_type: TransportType::Sea,
            etd: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
            eta: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            export_port_id: PortId::new(1),
            import_port_id: PortId::new(2),
            cbm_capacity: dec!(58.0),
        };
        assert_eq!(
            schedule.departure_month(),
            YearMonth::new(2025, 4).unwrap()
        );
    }
}
