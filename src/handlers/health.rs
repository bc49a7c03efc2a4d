use actix_web::{web, HttpResponse, Result};

use crate::models::{ApiKeyStatus, ApiResponse};
use crate::services::alphavantage::AlphaVantageService;

pub async fn health_check() -> Result<HttpResponse> {
    let response = ApiResponse::success("Service is healthy");
    Ok(HttpResponse::Ok().json(response))
}

/// 返回是否已配置 API Key，不返回 Key 本身
pub async fn api_key_status(service: web::Data<AlphaVantageService>) -> Result<HttpResponse> {
    let response = ApiResponse::success(ApiKeyStatus {
        has_api_key: service.has_api_key(),
    });
    Ok(HttpResponse::Ok().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/status", web::get().to(api_key_status));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::handlers::{self, testing};
    use crate::services::alphavantage::stub::StubTransport;

    #[actix_web::test]
    async fn test_health() {
        let stub = Arc::new(StubTransport::new(200, "{}"));
        let app = test::init_service(
            App::new()
                .app_data(testing::service(None, stub))
                .configure(handlers::config),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], "Service is healthy");
    }

    #[actix_web::test]
    async fn test_status_reports_key_presence_only() {
        for (key, expected) in [(Some(testing::TEST_KEY), true), (None, false)] {
            let stub = Arc::new(StubTransport::new(200, "{}"));
            let app = test::init_service(
                App::new()
                    .app_data(testing::service(key, stub.clone()))
                    .configure(handlers::config),
            )
            .await;

            let req = test::TestRequest::get().uri("/api/status").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["data"]["hasApiKey"], expected);
            assert!(!body.to_string().contains(testing::TEST_KEY));
            assert!(stub.calls().is_empty());
        }
    }
}
