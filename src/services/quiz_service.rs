use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::QuizRecord,
        dto::{
            request::{GenerateQuizRequest, HistoryParams},
            response::{GenerateQuizResponse, HistoryResponse, QuizLookupResponse, QuizRecordDto},
        },
    },
    repositories::QuizRecordRepository,
    services::{
        article_fetcher::ArticleFetcher,
        cache_reconciler::{reconcile, CacheDecision},
        generation_orchestrator::GenerationOrchestrator,
    },
};

pub struct QuizService {
    repository: Arc<dyn QuizRecordRepository>,
    fetcher: Arc<dyn ArticleFetcher>,
    orchestrator: Arc<GenerationOrchestrator>,
}

impl QuizService {
    pub fn new(
        repository: Arc<dyn QuizRecordRepository>,
        fetcher: Arc<dyn ArticleFetcher>,
        orchestrator: Arc<GenerationOrchestrator>,
    ) -> Self {
        Self {
            repository,
            fetcher,
            orchestrator,
        }
    }

    /// Serves a stored quiz when it still fits the request, otherwise fetches
    /// the article, generates a fresh quiz and stores it.
    pub async fn generate_quiz(&self, request: GenerateQuizRequest) -> AppResult<GenerateQuizResponse> {
        request.validate()?;

        if let Some(record) = self.repository.find_latest_by_url(&request.url).await? {
            match reconcile(&record.full_quiz_data, request.extra_questions) {
                CacheDecision::Hit(quiz) => {
                    log::info!("Serving cached quiz {} for {}", record.id, request.url);
                    return Ok(GenerateQuizResponse {
                        quiz,
                        id: record.id,
                        cached: true,
                    });
                }
                CacheDecision::Miss(reason) => {
                    log::debug!("Cached quiz {} not reusable: {}", record.id, reason);
                }
            }
        }

        let article = self.fetcher.fetch(&request.url).await?;
        let quiz = self
            .orchestrator
            .generate(&article.title, &article.body, request.extra_questions)
            .await;

        let record = self
            .repository
            .insert(QuizRecord::new(&request.url, &article, &quiz)?)
            .await?;
        log::info!(
            "Stored quiz {} for {} ({} questions)",
            record.id,
            request.url,
            quiz.questions.len()
        );

        Ok(GenerateQuizResponse {
            quiz,
            id: record.id,
            cached: false,
        })
    }

    /// Stored records, newest first. `limit` is clamped to 1..=100.
    pub async fn recent_records(&self, params: &HistoryParams) -> AppResult<Vec<QuizRecord>> {
        self.repository
            .list_recent(params.skip(), params.limit())
            .await
    }

    pub async fn history(&self, params: HistoryParams) -> AppResult<HistoryResponse> {
        let records = self.recent_records(&params).await?;

        Ok(HistoryResponse {
            quizzes: records.into_iter().map(QuizRecordDto::from).collect(),
        })
    }

    pub async fn get_record(&self, id: &str) -> AppResult<QuizRecord> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<QuizLookupResponse> {
        let record = self.get_record(id).await?;
        Ok(QuizLookupResponse::from_record(record))
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.repository.health_check().await
    }
}
