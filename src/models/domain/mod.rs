pub mod article;
pub mod quiz;
pub mod quiz_question;
pub mod quiz_record;
pub use article::ArticleText;
pub use quiz::{QuestionCount, QuizResult};
pub use quiz_question::QuizQuestion;
pub use quiz_record::QuizRecord;
