use std::sync::Arc;

use crate::{
    models::domain::{ArticleText, QuestionCount, QuizResult},
    services::{
        model_service::GenerationModel,
        synthesis::{
            summary_builder::fallback_study_summary, KeyTerms, LocalDigest, ProvisionalQuiz,
            QuestionSynthesizer, Segment, SummaryBuilder,
        },
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationPolicy {
    /// Replace whatever study summary the question path produced with a freshly
    /// generated one, even when the model already supplied it.
    pub always_regenerate_study_summary: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            always_regenerate_study_summary: true,
        }
    }
}

/// Single entry point from article text to a complete `QuizResult`.
pub struct GenerationOrchestrator {
    questions: QuestionSynthesizer,
    summaries: SummaryBuilder,
    policy: GenerationPolicy,
}

impl GenerationOrchestrator {
    /// `model` is `None` when no generation credential is configured.
    pub fn new(model: Option<Arc<dyn GenerationModel>>) -> Self {
        Self {
            questions: QuestionSynthesizer::new(model.clone()),
            summaries: SummaryBuilder::new(model),
            policy: GenerationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Never fails: every external failure degrades to the local path.
    pub async fn generate(&self, title: &str, text: &str, extra_questions: bool) -> QuizResult {
        let count = QuestionCount::from_extra_questions(extra_questions);
        let article = ArticleText::new(title, text);

        let segment = Segment::from_body(text);
        let key_terms = KeyTerms::extract(&segment.sentences, title);
        log::debug!(
            "Segmented '{}': {} paragraphs, {} sentences, {} key terms",
            title,
            segment.paragraphs.len(),
            segment.sentences.len(),
            key_terms.len()
        );

        let provisional = self
            .questions
            .synthesize(&article, &segment, &key_terms, count)
            .await;

        let study_summary =
            if self.policy.always_regenerate_study_summary || provisional.study_summary.is_none() {
                Some(self.summaries.study_summary(title).await)
            } else {
                None
            };

        normalize(provisional, title, &segment.paragraphs, study_summary)
    }
}

/// Fills every missing field so the result always has the canonical shape.
pub fn normalize(
    provisional: ProvisionalQuiz,
    title: &str,
    paragraphs: &[String],
    study_summary: Option<String>,
) -> QuizResult {
    let ProvisionalQuiz {
        title: quiz_title,
        summary,
        study_summary: provisional_study_summary,
        questions,
    } = provisional;

    let summary = summary.unwrap_or_else(|| LocalDigest::build(paragraphs).summary_line(title));
    let study_summary = study_summary
        .or(provisional_study_summary)
        .unwrap_or_else(|| fallback_study_summary(title));
    let questions = questions.unwrap_or_else(|| {
        log::debug!("Generation result for '{}' had no question list", title);
        Vec::new()
    });

    QuizResult {
        title: quiz_title.unwrap_or_else(|| title.to_string()),
        summary,
        study_summary,
        questions,
    }
}
