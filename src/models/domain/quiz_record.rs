use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{ArticleText, QuizResult};

/// One stored generation. Created once, never updated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuizRecord {
    pub id: String,
    pub url: String,
    pub title: String,
    // Stored as epoch millis so the history sort is numeric.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub generated_at: DateTime<Utc>,
    pub scraped_content: String,
    /// Serialized `QuizResult`
    pub full_quiz_data: String,
}

impl QuizRecord {
    pub fn new(url: &str, article: &ArticleText, quiz: &QuizResult) -> Result<Self, serde_json::Error> {
        Ok(QuizRecord {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            title: if quiz.title.is_empty() {
                article.title.clone()
            } else {
                quiz.title.clone()
            },
            generated_at: Utc::now(),
            scraped_content: article.body.clone(),
            full_quiz_data: serde_json::to_string(quiz)?,
        })
    }
}
