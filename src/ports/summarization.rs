//! Summarization service port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Turns a batch of texts into one human-readable summary.
///
/// Backed by an AI service in production; tests and development use the
/// fixed-response stub adapter. The dashboard never inspects the text.
#[async_trait]
pub trait SummarizationService: Send + Sync {
    async fn summarize(&self, texts: &[String]) -> Result<String, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarization_service_is_object_safe() {
        fn _accepts_dyn(_service: &dyn SummarizationService) {}
    }
}
