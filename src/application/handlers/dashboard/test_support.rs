//! Shared mock ports and fixtures for the dashboard handler tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::domain::dashboard::CongestionReading;
use crate::domain::forecast::ForecastPoint;
use crate::domain::foundation::{
    DomainError, ErrorCode, PortId, QuotationId, RequestId, ScheduleId, UserId, YearMonth,
};
use crate::domain::port::Port;
use crate::domain::quotation::{
    ChargeAmounts, ChargeExport, Quotation, QuotationCost, QuotationStatus,
};
use crate::domain::schedule::{Schedule, TransportType};
use crate::domain::user::{Forwarding, User};
use crate::ports::{
    CongestionProvider, ForecastStore, ForwarderDirectory, NewsArticle, NewsStore, PortDirectory,
    PricingEngine, QuotationStore, ScheduleStore, SummarizationService,
};

pub fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

pub fn flat_charges(base: Decimal) -> ChargeExport {
    ChargeExport {
        terminal_handling: ChargeAmounts::lcl(base),
        handling_fee: ChargeAmounts::lcl(base),
        cfs_charge: ChargeAmounts::lcl(base),
        lift_status: ChargeAmounts::lcl(base),
        customs_clearance_fee: ChargeAmounts::lcl(base),
        trucking: ChargeAmounts::lcl(base),
    }
}

pub fn quotation_with_charges(
    request_id: RequestId,
    status: QuotationStatus,
    forwarder: i64,
    schedule: i64,
    total: Decimal,
    charges: ChargeExport,
) -> Quotation {
    Quotation {
        id: QuotationId::new(),
        request_id,
        status,
        forwarder_id: UserId::new(forwarder),
        schedule_id: ScheduleId::new(schedule),
        cost: QuotationCost::new(total, charges).unwrap(),
    }
}

pub fn detail_quotation(
    request_id: RequestId,
    forwarder: i64,
    schedule: i64,
    total: Decimal,
) -> Quotation {
    quotation_with_charges(
        request_id,
        QuotationStatus::DetailInfo,
        forwarder,
        schedule,
        total,
        flat_charges(dec!(25.00)),
    )
}

pub fn prediction_quotation(request_id: RequestId, forwarder: i64, schedule: i64) -> Quotation {
    quotation_with_charges(
        request_id,
        QuotationStatus::PredictionSheet,
        forwarder,
        schedule,
        dec!(1000.00),
        flat_charges(dec!(25.00)),
    )
}

pub fn schedule_departing(id: i64, etd: NaiveDate) -> Schedule {
    Schedule {
        id: ScheduleId::new(id),
        carrier: "HMM".to_string(),
        transport_type: TransportType::Sea,
        etd,
        eta: etd + chrono::Duration::days(20),
        export_port_id: PortId::new(1),
        import_port_id: PortId::new(2),
        cbm_capacity: dec!(58.0),
    }
}

pub struct MockQuotationStore {
    quotations: Vec<Quotation>,
}

impl MockQuotationStore {
    pub fn with_quotations(quotations: Vec<Quotation>) -> Self {
        Self { quotations }
    }

    pub fn empty() -> Self {
        Self { quotations: vec![] }
    }
}

#[async_trait]
impl QuotationStore for MockQuotationStore {
    async fn find_by_request_and_status(
        &self,
        request_id: RequestId,
        status: QuotationStatus,
    ) -> Result<Vec<Quotation>, DomainError> {
        Ok(self
            .quotations
            .iter()
            .filter(|q| q.request_id == request_id && q.status == status)
            .cloned()
            .collect())
    }

    async fn find_one_by_request_and_status(
        &self,
        request_id: RequestId,
        status: QuotationStatus,
    ) -> Result<Option<Quotation>, DomainError> {
        Ok(self
            .quotations
            .iter()
            .find(|q| q.request_id == request_id && q.status == status)
            .cloned())
    }
}

pub struct MockScheduleStore {
    schedules: Vec<Schedule>,
}

impl MockScheduleStore {
    pub fn with_schedules(schedules: Vec<Schedule>) -> Self {
        Self { schedules }
    }

    /// Schedules with the given ids, all departing 2025-04-12.
    pub fn with_defaults(ids: &[i64]) -> Self {
        let etd = NaiveDate::from_ymd_opt(2025, 4, 12).unwrap();
        Self {
            schedules: ids.iter().map(|id| schedule_departing(*id, etd)).collect(),
        }
    }
}

#[async_trait]
impl ScheduleStore for MockScheduleStore {
    async fn find_by_id(&self, id: ScheduleId) -> Result<Option<Schedule>, DomainError> {
        Ok(self.schedules.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_year_month(&self, month: YearMonth) -> Result<Vec<Schedule>, DomainError> {
        Ok(self
            .schedules
            .iter()
            .filter(|s| s.departure_month() == month)
            .cloned()
            .collect())
    }
}

pub struct MockForwarderDirectory {
    firms: HashMap<UserId, String>,
}

impl MockForwarderDirectory {
    pub fn with_firms(firms: &[(i64, &str)]) -> Self {
        Self {
            firms: firms
                .iter()
                .map(|(id, name)| (UserId::new(*id), name.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl ForwarderDirectory for MockForwarderDirectory {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.firms.get(&id).map(|firm_name| User {
            id,
            forwarding: Forwarding {
                firm_name: firm_name.clone(),
            },
        }))
    }
}

pub struct MockPortDirectory {
    ports: HashMap<PortId, String>,
}

impl MockPortDirectory {
    pub fn with_ports(ports: &[(i64, &str)]) -> Self {
        Self {
            ports: ports
                .iter()
                .map(|(id, name)| (PortId::new(*id), name.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl PortDirectory for MockPortDirectory {
    async fn find_by_id(&self, id: PortId) -> Result<Option<Port>, DomainError> {
        Ok(self.ports.get(&id).map(|name| Port {
            id,
            name: name.clone(),
        }))
    }
}

pub struct MockForecastStore {
    points: Vec<ForecastPoint>,
}

impl MockForecastStore {
    pub fn with_points(points: Vec<ForecastPoint>) -> Self {
        Self { points }
    }
}

#[async_trait]
impl ForecastStore for MockForecastStore {
    async fn find_within(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> Result<Vec<ForecastPoint>, DomainError> {
        Ok(self
            .points
            .iter()
            .filter(|p| p.month >= from && p.month <= to)
            .copied()
            .collect())
    }

    async fn find_by_month(
        &self,
        month: YearMonth,
    ) -> Result<Option<ForecastPoint>, DomainError> {
        Ok(self.points.iter().find(|p| p.month == month).copied())
    }
}

pub struct MockNewsStore {
    articles: Vec<NewsArticle>,
}

impl MockNewsStore {
    pub fn with_articles(articles: Vec<NewsArticle>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl NewsStore for MockNewsStore {
    async fn find_by_category_and_date(
        &self,
        category: &str,
        date: NaiveDate,
    ) -> Result<Vec<NewsArticle>, DomainError> {
        Ok(self
            .articles
            .iter()
            .filter(|a| a.category == category && a.published_on == date)
            .cloned()
            .collect())
    }
}

pub struct MockPricingEngine {
    result: Option<Decimal>,
}

impl MockPricingEngine {
    pub fn returning(result: Decimal) -> Self {
        Self {
            result: Some(result),
        }
    }

    pub fn failing() -> Self {
        Self { result: None }
    }
}

#[async_trait]
impl PricingEngine for MockPricingEngine {
    async fn recompute(
        &self,
        _quotation: &Quotation,
        _forecast_index: i32,
    ) -> Result<Decimal, DomainError> {
        self.result
            .ok_or_else(|| DomainError::new(ErrorCode::PricingFailed, "tariff table unavailable"))
    }
}

pub struct MockSummarizer {
    text: String,
}

impl MockSummarizer {
    pub fn returning(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[async_trait]
impl SummarizationService for MockSummarizer {
    async fn summarize(&self, _texts: &[String]) -> Result<String, DomainError> {
        Ok(self.text.clone())
    }
}

pub struct MockCongestionProvider {
    reading: CongestionReading,
}

impl MockCongestionProvider {
    pub fn reading(percent: u8, description: &str) -> Self {
        Self {
            reading: CongestionReading {
                percent,
                description: description.to_string(),
            },
        }
    }
}

#[async_trait]
impl CongestionProvider for MockCongestionProvider {
    async fn congestion_for(&self, _port: &Port) -> Result<CongestionReading, DomainError> {
        Ok(self.reading.clone())
    }
}
