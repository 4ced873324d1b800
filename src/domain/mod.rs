//! Domain layer: pure entities, value objects, and the computational core.
//!
//! Nothing in this module performs I/O; all time anchors are supplied by
//! callers and all lookups happen behind the ports.

pub mod dashboard;
pub mod forecast;
pub mod foundation;
pub mod port;
pub mod quotation;
pub mod schedule;
pub mod user;
