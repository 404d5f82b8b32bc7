use std::sync::Arc;

use serde_json::Value;

use crate::{
    constants::question_templates::{
        fill_title, DESCRIPTIVE_KEYWORDS, DESCRIPTIVE_QUESTION, GENERIC_QUESTION_TEMPLATES,
        HISTORICAL_KEYWORDS, HISTORICAL_QUESTION, SPARE_DISTRACTORS, USAGE_KEYWORDS,
        USAGE_QUESTION,
    },
    models::domain::{ArticleText, QuestionCount, QuizQuestion},
    services::{
        model_service::{GenerationError, GenerationModel, QuizGenerationRequest},
        synthesis::{
            segmenter::Segment, summary_builder::LocalDigest, term_extractor::KeyTerms,
        },
    },
};

/// Words of a sentence kept in the correct answer.
pub const ANSWER_WORDS: usize = 12;
/// Distractors are built from key terms only when at least this many exist.
pub const MIN_TERMS_FOR_DISTRACTORS: usize = 4;

/// A generation result before the orchestrator enforces the final schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProvisionalQuiz {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub study_summary: Option<String>,
    pub questions: Option<Vec<QuizQuestion>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SentenceKind {
    Descriptive,
    Usage,
    Historical,
    General,
}

/// Keywords match anywhere in the lowercased sentence, so "this" counts as
/// descriptive and "reused" as usage.
fn classify(sentence: &str) -> SentenceKind {
    let lowered = sentence.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

    if mentions(&DESCRIPTIVE_KEYWORDS[..]) {
        SentenceKind::Descriptive
    } else if mentions(&USAGE_KEYWORDS[..]) {
        SentenceKind::Usage
    } else if mentions(&HISTORICAL_KEYWORDS[..]) {
        SentenceKind::Historical
    } else {
        SentenceKind::General
    }
}

fn generic_question(title: &str, index: usize) -> String {
    fill_title(
        GENERIC_QUESTION_TEMPLATES[index % GENERIC_QUESTION_TEMPLATES.len()],
        title,
    )
}

fn question_text(title: &str, sentence: &str, index: usize) -> String {
    match classify(sentence) {
        SentenceKind::Descriptive => fill_title(DESCRIPTIVE_QUESTION, title),
        SentenceKind::Usage => fill_title(USAGE_QUESTION, title),
        SentenceKind::Historical => fill_title(HISTORICAL_QUESTION, title),
        SentenceKind::General => generic_question(title, index),
    }
}

fn answer_from_sentence(sentence: &str) -> String {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let head = words
        .iter()
        .take(ANSWER_WORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > ANSWER_WORDS {
        format!("{}...", head)
    } else {
        head
    }
}

fn distractors(title: &str, key_terms: &KeyTerms, index: usize) -> Vec<String> {
    if key_terms.len() >= MIN_TERMS_FOR_DISTRACTORS {
        let term = |offset: usize| key_terms.cycled(index + offset).unwrap_or("related concepts");
        vec![
            format!("It primarily focuses on {} and related technologies", term(0)),
            format!("It is mainly associated with {} research", term(1)),
            format!("It represents advances in {} methodology", term(2)),
        ]
    } else {
        let title_lower = title.to_lowercase();
        vec![
            format!("It is an outdated approach to {} implementation", title_lower),
            "It represents theoretical concepts not yet practically applied".to_string(),
            format!("It focuses solely on commercial applications of {}", title_lower),
        ]
    }
}

/// Replaces any option equal to an earlier one. The first option is never touched.
fn dedupe_options(options: Vec<String>, title: &str) -> Vec<String> {
    let mut spares = SPARE_DISTRACTORS.iter().map(|spare| fill_title(spare, title));
    let mut unique: Vec<String> = Vec::with_capacity(options.len());

    for option in options {
        if !unique.contains(&option) {
            unique.push(option);
            continue;
        }
        if let Some(spare) = spares.by_ref().find(|spare| !unique.contains(spare)) {
            unique.push(spare);
        }
    }
    unique
}

fn sentence_question(title: &str, sentence: &str, key_terms: &KeyTerms, index: usize) -> QuizQuestion {
    let correct = answer_from_sentence(sentence);

    let mut options = vec![correct.clone()];
    options.extend(distractors(title, key_terms, index));

    QuizQuestion::new(
        question_text(title, sentence, index),
        dedupe_options(options, title),
        correct,
    )
}

fn template_question(title: &str, key_terms: &KeyTerms, index: usize) -> QuizQuestion {
    let options = if key_terms.is_empty() {
        vec![
            format!("A fundamental aspect of {}", title),
            format!("An advanced feature of {}", title),
            format!("A basic component of {}", title),
            format!("A specialized area of {}", title),
        ]
    } else {
        let term = |i: usize, fallback: &'static str| key_terms.get(i).unwrap_or(fallback);
        vec![
            format!("It involves {} and related processes", term(0, "core concepts")),
            format!("It focuses on {}", term(1, "technical aspects")),
            format!("It emphasizes {}", term(2, "practical applications")),
            format!("It represents {}", term(3, "innovative approaches")),
        ]
    };

    let options = dedupe_options(options, title);
    let answer = options[0].clone();
    QuizQuestion::new(generic_question(title, index), options, answer)
}

/// Deterministic questions from sentences and key terms. Always returns `count` items.
pub fn synthesize_questions(
    title: &str,
    sentences: &[String],
    key_terms: &KeyTerms,
    count: usize,
) -> Vec<QuizQuestion> {
    (0..count)
        .map(|i| match sentences.get(i) {
            Some(sentence) => sentence_question(title, sentence, key_terms, i),
            None => template_question(title, key_terms, i),
        })
        .collect()
}

/// The complete local result: questions plus digest-based summaries.
pub fn fallback_quiz(
    title: &str,
    segment: &Segment,
    key_terms: &KeyTerms,
    count: QuestionCount,
) -> ProvisionalQuiz {
    let digest = LocalDigest::build(&segment.paragraphs);

    ProvisionalQuiz {
        title: Some(title.to_string()),
        summary: Some(digest.summary_line(title)),
        study_summary: Some(digest.study_text(title)),
        questions: Some(synthesize_questions(
            title,
            &segment.sentences,
            key_terms,
            count.get(),
        )),
    }
}

/// "B", "b)", "C." style answers.
fn option_letter_index(answer: &str) -> Option<usize> {
    let trimmed = answer.trim().trim_end_matches([')', '.', ':']);
    let mut chars = trimmed.chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match letter.to_ascii_uppercase() {
        'A' => Some(0),
        'B' => Some(1),
        'C' => Some(2),
        'D' => Some(3),
        _ => None,
    }
}

fn parse_model_question(value: &Value) -> Option<QuizQuestion> {
    let mut question: QuizQuestion = serde_json::from_value(value.clone()).ok()?;

    if !question.options.contains(&question.answer) {
        let resolved = option_letter_index(&question.answer)
            .and_then(|idx| question.options.get(idx))
            .cloned()?;
        question.answer = resolved;
    }

    question.is_well_formed().then_some(question)
}

/// Accepts a model reply only if it carries exactly `count` well-formed questions.
pub fn parse_model_quiz(value: Value, count: usize) -> Result<ProvisionalQuiz, GenerationError> {
    let Value::Object(map) = value else {
        return Err(GenerationError::Malformed("expected a JSON object".to_string()));
    };

    let text_field = |key: &str| {
        map.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let raw_questions = map
        .get("questions")
        .and_then(Value::as_array)
        .ok_or_else(|| GenerationError::Malformed("questions is not a list".to_string()))?;

    if raw_questions.len() != count {
        return Err(GenerationError::Malformed(format!(
            "expected {} questions, got {}",
            count,
            raw_questions.len()
        )));
    }

    let questions = raw_questions
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            parse_model_question(raw).ok_or_else(|| {
                GenerationError::Malformed(format!("question {} is not well formed", i + 1))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProvisionalQuiz {
        title: text_field("title"),
        summary: text_field("summary"),
        study_summary: text_field("study_summary"),
        questions: Some(questions),
    })
}

/// Model first, deterministic generator on any failure. Never mixes the two.
pub struct QuestionSynthesizer {
    model: Option<Arc<dyn GenerationModel>>,
}

impl QuestionSynthesizer {
    pub fn new(model: Option<Arc<dyn GenerationModel>>) -> Self {
        Self { model }
    }

    pub async fn synthesize(
        &self,
        article: &ArticleText,
        segment: &Segment,
        key_terms: &KeyTerms,
        count: QuestionCount,
    ) -> ProvisionalQuiz {
        if let Some(model) = &self.model {
            let request = QuizGenerationRequest::new(&article.title, &article.body, count.get());
            let generated = match model.generate_quiz(&request).await {
                Ok(value) => parse_model_quiz(value, count.get()),
                Err(err) => Err(err),
            };

            match generated {
                Ok(quiz) => {
                    log::info!("Model generated {} questions for '{}'", count.get(), article.title);
                    return quiz;
                }
                Err(err) => log::warn!(
                    "Model quiz generation failed for '{}': {}, using fallback",
                    article.title,
                    err
                ),
            }
        }

        fallback_quiz(&article.title, segment, key_terms, count)
    }
}
