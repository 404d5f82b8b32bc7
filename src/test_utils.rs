use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::QuizRecord, repositories::QuizRecordRepository};

/// Vec-backed repository; insertion order breaks `generated_at` ties.
#[derive(Default)]
pub struct InMemoryQuizRecordRepository {
    records: Arc<RwLock<Vec<QuizRecord>>>,
}

impl InMemoryQuizRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<QuizRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
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

pub mod fixtures {
    use chrono::{DateTime, Duration, Utc};

    use crate::models::domain::{ArticleText, QuizQuestion, QuizRecord, QuizResult};

    pub const PHOTOSYNTHESIS_URL: &str = "https://en.wikipedia.org/wiki/Photosynthesis";

    pub fn photosynthesis_article() -> ArticleText {
        ArticleText::new(
            "Photosynthesis",
            "Photosynthesis is the process used by plants. Green leaves turn sunlight, \
             water and carbon dioxide into sugar and oxygen.\n\n\
             Most of the work happens inside the chloroplasts of leaf cells, where \
             chlorophyll traps light.",
        )
    }

    pub fn quiz_result(title: &str, count: usize) -> QuizResult {
        QuizResult {
            title: title.to_string(),
            summary: format!("Information about {}", title),
            study_summary: format!("Study Material: {}", title),
            questions: (0..count)
                .map(|i| {
                    QuizQuestion::new(
                        format!("Question {} about {}?", i + 1, title),
                        vec!["a".into(), "b".into(), "c".into(), "d".into()],
                        "a".to_string(),
                    )
                })
                .collect(),
        }
    }

    /// A stored record generated `minutes_ago` minutes before now.
    pub fn quiz_record(url: &str, count: usize, minutes_ago: i64) -> QuizRecord {
        let article = ArticleText::new("Stored", "Stored body");
        let mut record =
            QuizRecord::new(url, &article, &quiz_result("Stored", count)).unwrap_or_else(|e| {
                panic!("fixture record should serialize: {}", e);
            });
        record.generated_at = minutes_before_now(minutes_ago);
        record
    }

    fn minutes_before_now(minutes: i64) -> DateTime<Utc> {
        Utc::now() - Duration::minutes(minutes)
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(status.is_success(), "Expected success status, got: {}", status);
    }
}

#[cfg(test)]
mod tests {
    use super::{fixtures::*, *};

    #[tokio::test]
    async fn latest_by_url_prefers_newest_record() {
        let older = quiz_record(PHOTOSYNTHESIS_URL, 10, 30);
        let newer = quiz_record(PHOTOSYNTHESIS_URL, 15, 5);
        let repo = InMemoryQuizRecordRepository::with_records(vec![older, newer.clone()]);

        let found = repo
            .find_latest_by_url(PHOTOSYNTHESIS_URL)
            .await
            .expect("lookup")
            .expect("record");
        assert_eq!(found.id, newer.id);
    }

    #[tokio::test]
    async fn list_recent_is_newest_first_and_paged() {
        let records = vec![
            quiz_record("https://example.org/a", 10, 30),
            quiz_record("https://example.org/b", 10, 10),
            quiz_record("https://example.org/c", 10, 20),
        ];
        let repo = InMemoryQuizRecordRepository::with_records(records);

        let page = repo.list_recent(1, 5).await.expect("list");
        let urls: Vec<&str> = page.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://example.org/c", "https://example.org/a"]);
    }
}
