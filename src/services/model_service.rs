use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::{
    config::Config,
    constants::{
        prompts::STUDY_SUMMARY_PROMPT,
        quiz_prompt::{FORMAT_INSTRUCTIONS_HEADER, QUIZ_GENERATION_PROMPT},
    },
    models::domain::QuizResult,
    services::synthesis::segmenter::truncate_chars,
};

/// Only the head of the article is sent to the model.
pub const MAX_PROMPT_ARTICLE_CHARS: usize = 1500;
const QUIZ_TEMPERATURE: f32 = 0.7;

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(?P<body>.*?)```").expect("JSON_FENCE is a valid regex pattern")
});

/// Failure of an external generation call. Never leaves the synthesis layer.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Request(String),

    #[error("generation service returned no content")]
    EmptyResponse,

    #[error("malformed generation response: {0}")]
    Malformed(String),
}

impl From<OpenAIError> for GenerationError {
    fn from(err: OpenAIError) -> Self {
        GenerationError::Request(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizGenerationRequest {
    pub title: String,
    pub article_text: String,
    pub question_count: usize,
    pub format_instructions: String,
}

impl QuizGenerationRequest {
    pub fn new(title: &str, text: &str, question_count: usize) -> Self {
        Self {
            title: title.to_string(),
            article_text: truncate_chars(text, MAX_PROMPT_ARTICLE_CHARS).to_string(),
            question_count,
            format_instructions: format_instructions(),
        }
    }

    pub fn prompt(&self) -> String {
        QUIZ_GENERATION_PROMPT
            .replace("{title}", &self.title)
            .replace("{article_text}", &self.article_text)
            .replace("{question_count}", &self.question_count.to_string())
            .replace("{format_instructions}", &self.format_instructions)
    }
}

/// JSON schema of `QuizResult` wrapped in output instructions.
pub fn format_instructions() -> String {
    let schema = schemars::schema_for!(QuizResult);
    let schema_json = serde_json::to_string(&schema).unwrap_or_default();
    format!("{}\n```\n{}\n```", FORMAT_INSTRUCTIONS_HEADER, schema_json)
}

pub fn study_summary_prompt(title: &str) -> String {
    STUDY_SUMMARY_PROMPT.replace("{title}", title)
}

/// Parses a model reply as JSON, tolerating a surrounding code fence.
pub fn json_from_reply(reply: &str) -> Result<Value, GenerationError> {
    let body = JSON_FENCE
        .captures(reply)
        .and_then(|caps| caps.name("body"))
        .map(|m| m.as_str())
        .unwrap_or(reply)
        .trim();

    serde_json::from_str(body).map_err(|e| GenerationError::Malformed(e.to_string()))
}

/// External generation capability behind both primary paths.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationModel: Send + Sync {
    /// Returns the quiz object the model produced, unvalidated.
    async fn generate_quiz(&self, request: &QuizGenerationRequest) -> Result<Value, GenerationError>;

    /// Returns the raw long-form study summary text.
    async fn generate_study_summary(&self, title: &str) -> Result<String, GenerationError>;
}

/// OpenAI-compatible chat completions client (Gemini exposes one too).
pub struct OpenAiModelService {
    client: Client<OpenAIConfig>,
    quiz_model: String,
    study_summary_model: String,
}

impl OpenAiModelService {
    pub fn new(
        api_key: &SecretString,
        api_base: &str,
        quiz_model: &str,
        study_summary_model: &str,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base);

        Self {
            client: Client::with_config(config),
            quiz_model: quiz_model.to_string(),
            study_summary_model: study_summary_model.to_string(),
        }
    }

    /// `None` when no credential is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        config.generation_api_key.as_ref().map(|key| {
            Self::new(
                key,
                &config.generation_api_base,
                &config.quiz_model,
                &config.study_summary_model,
            )
        })
    }

    async fn complete(&self, body: Value) -> Result<String, GenerationError> {
        let response: Value = self.client.chat().create_byot(body).await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(content.to_string())
    }
}

#[async_trait]
impl GenerationModel for OpenAiModelService {
    async fn generate_quiz(&self, request: &QuizGenerationRequest) -> Result<Value, GenerationError> {
        log::debug!(
            "Requesting {} questions for '{}' from {}",
            request.question_count,
            request.title,
            self.quiz_model
        );

        let body = json!({
            "model": self.quiz_model,
            "temperature": QUIZ_TEMPERATURE,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "user", "content": request.prompt() }
            ]
        });

        let reply = self.complete(body).await?;
        json_from_reply(&reply)
    }

    async fn generate_study_summary(&self, title: &str) -> Result<String, GenerationError> {
        log::debug!("Requesting study summary for '{}' from {}", title, self.study_summary_model);

        let body = json!({
            "model": self.study_summary_model,
            "messages": [
                { "role": "user", "content": study_summary_prompt(title) }
            ]
        });

        self.complete(body).await
    }
}
