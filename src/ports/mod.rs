//! Ports - contracts between the dashboard engine and its collaborators.
//!
//! Following hexagonal architecture, the application layer depends only on
//! these traits; adapters implement them. All ports are read-only from the
//! engine's point of view: no operation here mutates persisted state.

mod congestion_provider;
mod forecast_store;
mod forwarder_directory;
mod news_store;
mod port_directory;
mod pricing_engine;
mod quotation_store;
mod schedule_store;
mod summarization;

pub use congestion_provider::CongestionProvider;
pub use forecast_store::ForecastStore;
pub use forwarder_directory::ForwarderDirectory;
pub use news_store::{NewsArticle, NewsStore};
pub use port_directory::PortDirectory;
pub use pricing_engine::PricingEngine;
pub use quotation_store::QuotationStore;
pub use schedule_store::ScheduleStore;
pub use summarization::SummarizationService;
