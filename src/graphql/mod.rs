pub mod mutations;
pub mod queries;

use async_graphql::{EmptySubscription, Schema as GraphQLSchema};

use crate::app_state::AppState;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;

pub type Schema = GraphQLSchema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema(app_state: AppState) -> Schema {
    GraphQLSchema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(app_state)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::{
        config::Config,
        services::{article_fetcher::MockArticleFetcher, GenerationOrchestrator},
        test_utils::{fixtures::*, InMemoryQuizRecordRepository},
    };

    fn schema(repository: InMemoryQuizRecordRepository, fetcher: MockArticleFetcher) -> Schema {
        create_schema(AppState::from_parts(
            Config::test_config(),
            Arc::new(repository),
            Arc::new(fetcher),
            GenerationOrchestrator::new(None),
        ))
    }

    #[tokio::test]
    async fn history_query_lists_records() {
        let schema = schema(
            InMemoryQuizRecordRepository::with_records(vec![
                quiz_record("https://example.org/a", 10, 5),
                quiz_record("https://example.org/b", 10, 1),
            ]),
            MockArticleFetcher::new(),
        );

        let response = schema.execute("{ history(limit: 5) { url title } }").await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().expect("json data");
        assert_eq!(data["history"][0]["url"], "https://example.org/b");
        assert_eq!(data["history"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn missing_quiz_carries_not_found_code() {
        let schema = schema(InMemoryQuizRecordRepository::new(), MockArticleFetcher::new());

        let response = schema.execute(r#"{ quiz(id: "nope") { id } }"#).await;

        assert_eq!(response.errors.len(), 1);
        let code = response.errors[0]
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned();
        assert_eq!(code, Some(async_graphql::Value::from("NOT_FOUND")));
    }

    #[tokio::test]
    async fn generate_quiz_mutation_returns_fresh_quiz() {
        let mut fetcher = MockArticleFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(photosynthesis_article()));
        let schema = schema(InMemoryQuizRecordRepository::new(), fetcher);

        let query = format!(
            r#"mutation {{ generateQuiz(url: "{}", extraQuestions: true) {{ cached quiz {{ title questions {{ answer }} }} }} }}"#,
            PHOTOSYNTHESIS_URL
        );
        let response = schema.execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().expect("json data");
        assert_eq!(data["generateQuiz"]["cached"], false);
        assert_eq!(data["generateQuiz"]["quiz"]["title"], "Photosynthesis");
        assert_eq!(
            data["generateQuiz"]["quiz"]["questions"].as_array().map(Vec::len),
            Some(15)
        );
    }
}
