use std::collections::HashSet;

use async_graphql::SimpleObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject, JsonSchema)]
pub struct QuizQuestion {
    /// The quiz question
    pub question: String,
    /// Four answer options
    pub options: Vec<String>,
    /// The correct answer, copied verbatim from options
    pub answer: String,
}

impl QuizQuestion {
    pub fn new(question: impl Into<String>, options: Vec<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            options,
            answer: answer.into(),
        }
    }

    /// Four distinct options, one of which is the answer.
    pub fn is_well_formed(&self) -> bool {
        if self.question.trim().is_empty() || self.options.len() != OPTIONS_PER_QUESTION {
            return false;
        }
        let unique: HashSet<&str> = self.options.iter().map(String::as_str).collect();
        unique.len() == self.options.len() && self.options.contains(&self.answer)
    }
}
