//! In-memory adapters for the store ports.
//!
//! These exist for integration tests and development wiring; real
//! persistence lives outside this crate.

mod directories;
mod forecast_store;
mod news_store;
mod quotation_store;
mod schedule_store;

pub use directories::{InMemoryForwarderDirectory, InMemoryPortDirectory};
pub use forecast_store::InMemoryForecastStore;
pub use news_store::InMemoryNewsStore;
pub use quotation_store::InMemoryQuotationStore;
pub use schedule_store::InMemoryScheduleStore;
