use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    app_state::AppState,
    models::dto::{request::GenerateQuizRequest, response::GenerateQuizResponse},
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn generate_quiz(
        &self,
        ctx: &Context<'_>,
        url: String,
        #[graphql(default)] extra_questions: bool,
    ) -> Result<GenerateQuizResponse> {
        let state = ctx.data::<AppState>()?;
        state
            .quiz_service
            .generate_quiz(GenerateQuizRequest {
                url,
                extra_questions,
            })
            .await
            .map_err(|e| e.extend())
    }
}
