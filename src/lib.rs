//! CargoLink - freight-forwarding dashboard engine.
//!
//! Selects the cheapest of competing forwarder quotations, builds the
//! per-charge-category comparison matrix, and computes "wait N months,
//! save X" recommendations from monthly freight-cost-index forecasts.
//! Invoked as an in-process library by an HTTP layer that lives outside
//! this crate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
