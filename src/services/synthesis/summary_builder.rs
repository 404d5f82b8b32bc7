use std::sync::Arc;

use crate::services::{
    model_service::GenerationModel,
    synthesis::segmenter::{char_len, truncate_chars},
};

pub const OVERVIEW_MAX_CHARS: usize = 400;
const KEY_POINT_SOURCE_PARAGRAPHS: usize = 3;
const KEY_POINT_MIN_PARAGRAPH_CHARS: usize = 100;
const KEY_POINT_MIN_SENTENCE_CHARS: usize = 20;

/// Overview and key points drawn straight from the article paragraphs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalDigest {
    pub overview: Option<String>,
    pub key_points: Vec<String>,
}

impl LocalDigest {
    pub fn build(paragraphs: &[String]) -> Self {
        let Some((first, rest)) = paragraphs.split_first() else {
            return LocalDigest::default();
        };

        let overview = format!("Overview: {}...", truncate_chars(first, OVERVIEW_MAX_CHARS));

        let key_points = rest
            .iter()
            .take(KEY_POINT_SOURCE_PARAGRAPHS)
            .filter(|para| char_len(para) > KEY_POINT_MIN_PARAGRAPH_CHARS)
            .filter_map(|para| {
                let first_sentence = para.split('.').next().unwrap_or_default().trim();
                (char_len(first_sentence) > KEY_POINT_MIN_SENTENCE_CHARS)
                    .then(|| first_sentence.to_string())
            })
            .collect();

        LocalDigest {
            overview: Some(overview),
            key_points,
        }
    }

    /// One-line summary: the overview block, or a title-based stand-in.
    pub fn summary_line(&self, title: &str) -> String {
        self.overview
            .clone()
            .unwrap_or_else(|| format!("Information about {}", title))
    }

    /// Overview and key points as a short study text.
    pub fn study_text(&self, title: &str) -> String {
        let Some(overview) = &self.overview else {
            return format!("This article provides comprehensive information about {}.", title);
        };

        if self.key_points.is_empty() {
            overview.clone()
        } else {
            format!("{}\n\nKey Points: {}", overview, self.key_points.join(" | "))
        }
    }
}

pub fn fallback_study_summary(title: &str) -> String {
    format!(
        "Study Material: This article provides comprehensive information about {}.",
        title
    )
}

/// Drops bold markers and turns `* ` bullets into `- ` bullets.
pub fn clean_study_summary(raw: &str) -> String {
    raw.replace("**", "")
        .lines()
        .map(|line| {
            let line = line.trim();
            match line.strip_prefix("* ") {
                Some(rest) => format!("- {}", rest),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Produces the long-form study summary, falling back to a generic sentence.
pub struct SummaryBuilder {
    model: Option<Arc<dyn GenerationModel>>,
}

impl SummaryBuilder {
    pub fn new(model: Option<Arc<dyn GenerationModel>>) -> Self {
        Self { model }
    }

    pub async fn study_summary(&self, title: &str) -> String {
        let Some(model) = &self.model else {
            return fallback_study_summary(title);
        };

        match model.generate_study_summary(title).await {
            Ok(raw) => {
                let cleaned = clean_study_summary(&raw);
                log::info!(
                    "Generated study summary for '{}' ({} chars)",
                    title,
                    cleaned.chars().count()
                );
                cleaned
            }
            Err(err) => {
                log::warn!("Study summary generation failed for '{}': {}", title, err);
                fallback_study_summary(title)
            }
        }
    }
}
