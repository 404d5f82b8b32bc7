use std::fmt;

use serde_json::Value;

use crate::models::domain::{QuestionCount, QuizResult};

/// Why a stored payload cannot serve the current request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MissReason {
    Unparseable(String),
    QuestionCountMismatch { expected: usize, found: usize },
    MissingStudySummary,
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::Unparseable(reason) => write!(f, "stored payload is unparseable: {}", reason),
            MissReason::QuestionCountMismatch { expected, found } => {
                write!(f, "expected {} questions, stored result has {}", expected, found)
            }
            MissReason::MissingStudySummary => write!(f, "stored result has no study_summary"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CacheDecision {
    Hit(QuizResult),
    Miss(MissReason),
}

impl CacheDecision {
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheDecision::Hit(_))
    }
}

/// Decides whether a stored `full_quiz_data` payload may be returned as-is.
///
/// A hit requires all of: the payload parses, its question list has the
/// length the request asks for, and it carries a `study_summary` field.
/// Anything else is a miss and the caller regenerates from scratch.
pub fn reconcile(payload: &str, extra_questions: bool) -> CacheDecision {
    let expected = QuestionCount::from_extra_questions(extra_questions).get();

    let value: Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(e) => return CacheDecision::Miss(MissReason::Unparseable(e.to_string())),
    };

    let found = match value.get("questions").and_then(Value::as_array) {
        Some(questions) => questions.len(),
        None => {
            return CacheDecision::Miss(MissReason::Unparseable(
                "questions is missing or not a list".to_string(),
            ))
        }
    };
    if found != expected {
        return CacheDecision::Miss(MissReason::QuestionCountMismatch { expected, found });
    }

    if value.get("study_summary").is_none() {
        return CacheDecision::Miss(MissReason::MissingStudySummary);
    }

    match serde_json::from_value::<QuizResult>(value) {
        Ok(quiz) => CacheDecision::Hit(quiz),
        Err(e) => CacheDecision::Miss(MissReason::Unparseable(e.to_string())),
    }
}
