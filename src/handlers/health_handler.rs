use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let db_health = state.quiz_service.health_check().await;

    let status = if db_health.is_ok() {
        "ready"
    } else {
        "not_ready"
    };

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" },
            "generation_model": if state.config.has_generation_credential() { "configured" } else { "local_only" }
        }
    });

    if db_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};

    use crate::{
        config::Config,
        errors::AppError,
        repositories::quiz_record_repository::MockQuizRecordRepository,
        services::{article_fetcher::MockArticleFetcher, GenerationOrchestrator},
    };

    fn state(healthy: bool) -> AppState {
        let mut repository = MockQuizRecordRepository::new();
        repository.expect_health_check().returning(move || {
            if healthy {
                Ok(())
            } else {
                Err(AppError::DatabaseError("unreachable".to_string()))
            }
        });
        AppState::from_parts(
            Config::test_config(),
            Arc::new(repository),
            Arc::new(MockArticleFetcher::new()),
            GenerationOrchestrator::new(None),
        )
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_ready_reports_database_state() {
        for (healthy, expected) in [(true, StatusCode::OK), (false, StatusCode::SERVICE_UNAVAILABLE)] {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(state(healthy)))
                    .service(health_check_ready),
            )
            .await;

            let req = test::TestRequest::get().uri("/health/ready").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["dependencies"]["generation_model"], "local_only");
        }
    }
}
