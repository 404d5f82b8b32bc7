use async_graphql::SimpleObject;
use serde::Serialize;

use crate::models::domain::{QuizRecord, QuizResult};

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct GenerateQuizResponse {
    pub quiz: QuizResult,
    pub id: String,
    /// True when the quiz was served from a stored record.
    pub cached: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuizRecordDto {
    pub id: String,
    pub url: String,
    pub title: String,
    pub date_generated: String,
    pub scraped_content: String,
    pub full_quiz_data: String,
}

impl From<QuizRecord> for QuizRecordDto {
    fn from(record: QuizRecord) -> Self {
        QuizRecordDto {
            id: record.id,
            url: record.url,
            title: record.title,
            date_generated: record.generated_at.to_rfc3339(),
            scraped_content: record.scraped_content,
            full_quiz_data: record.full_quiz_data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub quizzes: Vec<QuizRecordDto>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuizMeta {
    pub id: String,
    pub url: String,
    pub title: String,
    pub date_generated: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizLookupResponse {
    /// Stored payload, or just the title when the payload is unreadable.
    pub quiz: serde_json::Value,
    pub meta: QuizMeta,
}

impl QuizLookupResponse {
    pub fn from_record(record: QuizRecord) -> Self {
        let quiz = serde_json::from_str::<serde_json::Value>(&record.full_quiz_data)
            .unwrap_or_else(|_| serde_json::json!({ "title": record.title }));

        QuizLookupResponse {
            quiz,
            meta: QuizMeta {
                id: record.id,
                url: record.url,
                title: record.title,
                date_generated: record.generated_at.to_rfc3339(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(payload: &str) -> QuizRecord {
        QuizRecord {
            id: "abc".to_string(),
            url: "https://example.org/wiki/Rust".to_string(),
            title: "Rust".to_string(),
            generated_at: Utc::now(),
            scraped_content: "text".to_string(),
            full_quiz_data: payload.to_string(),
        }
    }

    #[test]
    fn lookup_parses_stored_payload() {
        let response = QuizLookupResponse::from_record(record(r#"{"title":"Rust","questions":[]}"#));

        assert_eq!(response.quiz["title"], "Rust");
        assert!(response.quiz["questions"].is_array());
        assert_eq!(response.meta.id, "abc");
    }

    #[test]
    fn lookup_falls_back_to_title_for_unreadable_payload() {
        let response = QuizLookupResponse::from_record(record("{not json"));

        assert_eq!(response.quiz, serde_json::json!({ "title": "Rust" }));
    }

    #[test]
    fn record_dto_formats_date() {
        let dto = QuizRecordDto::from(record("{}"));
        assert!(dto.date_generated.contains('T'));
    }
}
