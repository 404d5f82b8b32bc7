pub mod quiz_record_repository;

pub use quiz_record_repository::{MongoQuizRecordRepository, QuizRecordRepository};
