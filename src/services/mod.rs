pub mod article_fetcher;
pub mod cache_reconciler;
pub mod generation_orchestrator;
pub mod model_service;
pub mod quiz_service;
pub mod synthesis;

pub use article_fetcher::{ArticleFetcher, FetchError, HttpArticleFetcher};
pub use generation_orchestrator::{GenerationOrchestrator, GenerationPolicy};
pub use model_service::{GenerationModel, OpenAiModelService};
pub use quiz_service::QuizService;
