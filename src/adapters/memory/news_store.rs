//! In-memory news store adapter.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{NewsArticle, NewsStore};

#[derive(Debug, Clone, Default)]
pub struct InMemoryNewsStore {
    articles: Arc<RwLock<Vec<NewsArticle>>>,
}

impl InMemoryNewsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, article: NewsArticle) {
        self.articles.write().await.push(article);
    }
}

#[async_trait]
impl NewsStore for InMemoryNewsStore {
    async fn find_by_category_and_date(
        &self,
        category: &str,
        date: NaiveDate,
    ) -> Result<Vec<NewsArticle>, DomainError> {
        let articles = self.articles.read().await;
        Ok(articles
            .iter()
            .filter(|a| a.category == category && a.published_on == date)
            .cloned()
            .collect())
    }
}
