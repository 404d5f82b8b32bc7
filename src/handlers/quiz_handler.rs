use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{GenerateQuizRequest, HistoryParams},
};

#[get("/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "AI Wiki Quiz Generator API"
    }))
}

#[post("/generate_quiz")]
async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    let payload = payload.into_inner();
    log::info!(
        "[{}] Generate quiz for {} (extra_questions={})",
        request_id,
        payload.url,
        payload.extra_questions
    );

    let response = state.quiz_service.generate_quiz(payload).await.map_err(|e| {
        log::warn!("[{}] Quiz generation failed: {}", request_id, e);
        e
    })?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/history")]
async fn history(
    state: web::Data<AppState>,
    params: web::Query<HistoryParams>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.history(params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/quiz/{quiz_id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.get_quiz(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(response))
}
