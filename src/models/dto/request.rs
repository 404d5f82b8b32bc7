use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(url(message = "url must be an absolute http(s) URL"))]
    pub url: String,

    /// Asks for 15 questions instead of 10.
    #[serde(default)]
    pub extra_questions: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HistoryParams {
    #[validate(range(min = 0))]
    pub skip: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for HistoryParams {
    fn default() -> Self {
        Self {
            skip: Some(0),
            limit: Some(100),
        }
    }
}

impl HistoryParams {
    pub fn skip(&self) -> u64 {
        self.skip.unwrap_or(0).max(0) as u64
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100).clamp(1, 100)
    }
}
