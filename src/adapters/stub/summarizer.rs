//! Fixed-response summarizer adapter.
//!
//! Stands in for the AI summarization backend. The placeholder text lives
//! here, never in the core logic.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::ports::SummarizationService;

#[derive(Debug, Clone)]
pub struct FixedSummarizer {
    text: String,
}

impl FixedSummarizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for FixedSummarizer {
    fn default() -> Self {
        Self::new("Summary pending: AI summarization backend not connected.")
    }
}

#[async_trait]
impl SummarizationService for FixedSummarizer {
    async fn summarize(&self, _texts: &[String]) -> Result<String, DomainError> {
        Ok(self.text.clone())
    }
}
