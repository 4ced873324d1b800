//! Application query handlers, grouped by feature.

pub mod dashboard;
