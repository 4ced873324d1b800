//! News store port.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// A news article as stored by the ingestion pipeline (out of scope here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub category: String,
    pub title: String,
    pub content: String,
    pub published_on: NaiveDate,
}

/// Read access to ingested news articles.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Articles of one category published on the given day.
    async fn find_by_category_and_date(
        &self,
        category: &str,
        date: NaiveDate,
    ) -> Result<Vec<NewsArticle>, DomainError>;
}
