#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use wiki_quiz_server::{
    errors::AppResult,
    models::domain::{ArticleText, QuizRecord},
    repositories::QuizRecordRepository,
    services::{ArticleFetcher, FetchError},
};

pub const PHOTOSYNTHESIS_URL: &str = "https://en.wikipedia.org/wiki/Photosynthesis";

pub struct InMemoryQuizRecordRepository {
    records: Arc<RwLock<Vec<QuizRecord>>>,
}

impl InMemoryQuizRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl QuizRecordRepository for InMemoryQuizRecordRepository {
    async fn find_latest_by_url(&self, url: &str) -> AppResult<Option<QuizRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.url == url)
            .max_by_key(|r| r.generated_at)
            .cloned())
    }

    async fn insert(&self, record: QuizRecord) -> AppResult<QuizRecord> {
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn list_recent(&self, skip: u64, limit: i64) -> AppResult<Vec<QuizRecord>> {
        let records = self.records.read().await;
        let mut items: Vec<QuizRecord> = records.iter().rev().cloned().collect();
        items.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));

        Ok(items
            .into_iter()
            .skip(skip as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Serves canned pages by URL; anything else is a 404.
pub struct StubArticleFetcher {
    pages: HashMap<String, ArticleText>,
    calls: Arc<RwLock<usize>>,
}

impl StubArticleFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            calls: Arc::new(RwLock::new(0)),
        }
    }

    pub fn with_page(mut self, url: &str, article: ArticleText) -> Self {
        self.pages.insert(url.to_string(), article);
        self
    }

    pub async fn calls(&self) -> usize {
        *self.calls.read().await
    }
}

#[async_trait]
impl ArticleFetcher for StubArticleFetcher {
    async fn fetch(&self, url: &str) -> Result<ArticleText, FetchError> {
        *self.calls.write().await += 1;
        self.pages.get(url).cloned().ok_or(FetchError::Status(404))
    }
}

pub fn photosynthesis_article() -> ArticleText {
    ArticleText::new(
        "Photosynthesis",
        "Photosynthesis is the process used by plants. Green leaves turn sunlight, \
         water and carbon dioxide into sugar and oxygen.\n\n\
         Most of the work happens inside the chloroplasts of leaf cells, where \
         chlorophyll traps light.",
    )
}
