use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    repositories::{MongoQuizRecordRepository, QuizRecordRepository},
    services::{
        ArticleFetcher, GenerationModel, GenerationOrchestrator, HttpArticleFetcher,
        OpenAiModelService, QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let repository = Arc::new(MongoQuizRecordRepository::new(&db, &config.quizzes_collection));
        repository.ensure_indexes().await?;

        let fetcher = HttpArticleFetcher::new(&config)
            .map_err(|e| AppError::InternalError(format!("HTTP client init failed: {}", e)))?;

        let model: Option<Arc<dyn GenerationModel>> = match OpenAiModelService::from_config(&config) {
            Some(service) => {
                log::info!("Generation model configured: {}", config.quiz_model);
                Some(Arc::new(service))
            }
            None => {
                log::warn!("No generation credential configured, using local quiz generation only");
                None
            }
        };

        Ok(Self::from_parts(
            config,
            repository,
            Arc::new(fetcher),
            GenerationOrchestrator::new(model),
        ))
    }

    /// Wires the quiz service from already-built collaborators.
    pub fn from_parts(
        config: Config,
        repository: Arc<dyn QuizRecordRepository>,
        fetcher: Arc<dyn ArticleFetcher>,
        orchestrator: GenerationOrchestrator,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(
            repository,
            fetcher,
            Arc::new(orchestrator),
        ));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
