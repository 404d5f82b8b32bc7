use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    app_state::AppState,
    models::{domain::QuizRecord, dto::request::HistoryParams},
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Stored quizzes, newest first.
    async fn history(
        &self,
        ctx: &Context<'_>,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<QuizRecord>> {
        let state = ctx.data::<AppState>()?;
        state
            .quiz_service
            .recent_records(&HistoryParams { skip, limit })
            .await
            .map_err(|e| e.extend())
    }

    async fn quiz(&self, ctx: &Context<'_>, id: ID) -> Result<QuizRecord> {
        let state = ctx.data::<AppState>()?;
        state
            .quiz_service
            .get_record(&id)
            .await
            .map_err(|e| e.extend())
    }
}
