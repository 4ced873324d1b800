//! Fixed-response adapters for the stubbed external collaborators.

mod congestion;
mod pricing;
mod summarizer;

pub use congestion::FixedCongestionProvider;
pub use pricing::IndexScaledPricingEngine;
pub use summarizer::FixedSummarizer;
