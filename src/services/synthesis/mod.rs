//! Article text to quiz: segmentation, key terms, summaries and questions.

pub mod question_synthesizer;
pub mod segmenter;
pub mod summary_builder;
pub mod term_extractor;

pub use question_synthesizer::{ProvisionalQuiz, QuestionSynthesizer};
pub use segmenter::Segment;
pub use summary_builder::{LocalDigest, SummaryBuilder};
pub use term_extractor::KeyTerms;
