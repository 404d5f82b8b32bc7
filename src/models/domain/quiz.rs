use async_graphql::SimpleObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizQuestion;

/// The canonical quiz payload. Every generation path produces this shape
/// before it is returned or persisted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject, JsonSchema)]
pub struct QuizResult {
    /// Article title
    pub title: String,
    /// Brief summary of the article
    pub summary: String,
    /// Detailed study summary for learning
    pub study_summary: String,
    /// List of quiz questions
    pub questions: Vec<QuizQuestion>,
}

/// Number of questions a request asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionCount {
    Standard,
    Extended,
}

impl QuestionCount {
    pub fn from_extra_questions(extra_questions: bool) -> Self {
        if extra_questions {
            QuestionCount::Extended
        } else {
            QuestionCount::Standard
        }
    }

    pub fn get(self) -> usize {
        match self {
            QuestionCount::Standard => 10,
            QuestionCount::Extended => 15,
        }
    }
}
