//! GetNewsDigestHandler - summarized same-day news for the caller's
//! interest categories.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::dashboard::{DashboardError, NewsDigestView};
use crate::ports::{NewsStore, SummarizationService};

/// Query for the interest-filtered news digest.
#[derive(Debug, Clone)]
pub struct GetNewsDigestQuery {
    pub interests: Vec<String>,
    pub today: NaiveDate,
}

/// Handler collecting article bodies and delegating to the summarizer.
pub struct GetNewsDigestHandler {
    news: Arc<dyn NewsStore>,
    summarizer: Arc<dyn SummarizationService>,
}

impl GetNewsDigestHandler {
    pub fn new(news: Arc<dyn NewsStore>, summarizer: Arc<dyn SummarizationService>) -> Self {
        Self { news, summarizer }
    }

    pub async fn handle(&self, query: GetNewsDigestQuery) -> Result<NewsDigestView, DashboardError> {
        let mut contents = Vec::new();
        for interest in &query.interests {
            let articles = self
                .news
                .find_by_category_and_date(interest, query.today)
                .await?;
            contents.extend(articles.into_iter().map(|a| a.content));
        }

        // An empty day still yields a digest; the summarizer decides what
        // to say about no news.
        let summary = self.summarizer.summarize(&contents).await?;

        Ok(NewsDigestView {
            interests: query.interests,
            summary,
        })
    }
}
